use crate::core::domain::error::ValidationError;
use std::fmt;

/// A Keystone password (plaintext, only held for re-authentication).
#[derive(Clone)]
pub struct Password(String);

impl Password {
    /// Creates a new password without validation.
    pub(crate) fn new_unchecked(password: String) -> Self {
        Self(password)
    }

    /// Returns the password as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Validates a password. Strength policy belongs to Keystone, so only
/// emptiness and length are checked here.
pub(crate) fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Field {
            field: "password".to_string(),
            message: "Password cannot be empty".to_string(),
        });
    }
    if password.len() > 4096 {
        return Err(ValidationError::Format(
            "Password cannot exceed 4096 characters".to_string(),
        ));
    }
    Ok(())
}
