use crate::core::domain::error::ValidationError;
use std::fmt;

/// A hardware (MAC) address, normalized to lowercase colon-separated form.
///
/// Ironic stores port addresses in this form, so lookups by address only
/// match when the query is normalized the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MacAddress(String);

impl MacAddress {
    /// Validates and normalizes a MAC address such as `52:54:00:AA:BB:CC`
    /// or `52-54-00-aa-bb-cc`.
    pub fn new(address: &str) -> Result<Self, ValidationError> {
        validate_mac_address(address)?;
        Ok(Self::new_unchecked(address))
    }

    /// Creates a new address without validation.
    pub(crate) fn new_unchecked(address: &str) -> Self {
        Self(address.trim().replace('-', ":").to_ascii_lowercase())
    }

    /// Returns the normalized address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates a MAC address string (six hex octets separated by `:` or `-`).
pub(crate) fn validate_mac_address(address: &str) -> Result<(), ValidationError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(ValidationError::Field {
            field: "mac".to_string(),
            message: "MAC address cannot be empty".to_string(),
        });
    }
    let separator = if address.contains('-') { '-' } else { ':' };
    let octets: Vec<&str> = address.split(separator).collect();
    if octets.len() != 6 {
        return Err(ValidationError::Format(format!(
            "MAC address '{}' must have six octets",
            address
        )));
    }
    if !octets
        .iter()
        .all(|octet| octet.len() == 2 && octet.chars().all(|c| c.is_ascii_hexdigit()))
    {
        return Err(ValidationError::Format(format!(
            "MAC address '{}' contains an invalid octet",
            address
        )));
    }
    Ok(())
}
