use crate::core::domain::error::ValidationError;

/// The Bare Metal API microversion used when none is configured.
///
/// 1.69 exposes retired nodes, smart NICs, deploy steps and `network_data`.
/// `boot_mode` and `secure_boot` need 1.75 or later and are null below it.
pub const DEFAULT_API_VERSION: &str = "1.69";

/// A Bare Metal API microversion such as `1.69`, sent in the
/// `X-OpenStack-Ironic-API-Version` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ApiVersion {
    major: u16,
    minor: u16,
}

impl ApiVersion {
    /// Parses a `major.minor` microversion string.
    pub fn parse(version: &str) -> Result<Self, ValidationError> {
        validate_api_version(version)?;
        let (major, minor) = version.trim().split_once('.').ok_or_else(|| {
            ValidationError::Format(format!("API version '{}' must be 'major.minor'", version))
        })?;
        let parse = |part: &str| {
            part.parse::<u16>().map_err(|e| {
                ValidationError::Format(format!("Invalid API version '{}': {}", version, e))
            })
        };
        Ok(Self {
            major: parse(major)?,
            minor: parse(minor)?,
        })
    }

    /// Returns the header value, e.g. `1.69`.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self { major: 1, minor: 69 }
    }
}

/// Validates a microversion string.
pub(crate) fn validate_api_version(version: &str) -> Result<(), ValidationError> {
    let version = version.trim();
    if version.is_empty() {
        return Err(ValidationError::Field {
            field: "api_version".to_string(),
            message: "API version cannot be empty".to_string(),
        });
    }
    let Some((major, minor)) = version.split_once('.') else {
        return Err(ValidationError::Format(format!(
            "API version '{}' must be 'major.minor'",
            version
        )));
    };
    if major != "1" {
        return Err(ValidationError::ConstraintViolation(format!(
            "Unsupported Bare Metal API major version '{}'",
            major
        )));
    }
    if minor.is_empty() || !minor.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::Format(format!(
            "API version '{}' has an invalid minor component",
            version
        )));
    }
    Ok(())
}
