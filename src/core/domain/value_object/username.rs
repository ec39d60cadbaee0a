use crate::core::domain::error::ValidationError;

/// A Keystone user name.
#[derive(Debug, Clone)]
pub struct Username(String);

impl Username {
    /// Creates a new username without validation.
    pub(crate) fn new_unchecked(username: String) -> Self {
        Self(username)
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates a Keystone user name.
pub(crate) fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::Field {
            field: "username".to_string(),
            message: "Username cannot be empty".to_string(),
        });
    }
    if username.len() > 255 {
        return Err(ValidationError::Format(format!(
            "Username length must not exceed 255 characters (got {})",
            username.len()
        )));
    }
    if username.chars().any(char::is_control) {
        return Err(ValidationError::Format(
            "Username contains control characters".to_string(),
        ));
    }
    Ok(())
}
