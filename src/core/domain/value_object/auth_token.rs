use crate::core::domain::error::ValidationError;
use std::fmt;
use std::time::{Duration, SystemTime};

/// A Keystone token issued for the configured project scope.
#[derive(Clone)]
pub struct AuthToken {
    value: String,
    issued_at: SystemTime,
}

impl AuthToken {
    /// Validates a token received in the `X-Subject-Token` header.
    pub fn new(value: String) -> Result<Self, ValidationError> {
        validate_token(&value)?;
        Ok(Self::new_unchecked(value))
    }

    /// Creates a new token without validation.
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self {
            value,
            issued_at: SystemTime::now(),
        }
    }

    /// Returns the token value, suitable for the `X-Auth-Token` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns when this token was obtained.
    /// Checks if the token is older than the given lifetime.
    #[must_use]
    pub fn is_expired(&self, lifetime: Duration) -> bool {
        self.issued_at
            .elapsed()
            .map(|age| age > lifetime)
            .unwrap_or(true)
    }
}

// Tokens are bearer credentials; keep them out of debug logs.
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("value", &"<redacted>")
            .field("issued_at", &self.issued_at)
            .finish()
    }
}

/// Validates the format of a token string.
pub(crate) fn validate_token(token: &str) -> Result<(), ValidationError> {
    if token.is_empty() {
        return Err(ValidationError::Field {
            field: "token".to_string(),
            message: "Token cannot be empty".to_string(),
        });
    }
    if !token.chars().all(|c| c.is_ascii_graphic()) {
        return Err(ValidationError::Format(
            "Token contains characters not allowed in an HTTP header".to_string(),
        ));
    }
    Ok(())
}
