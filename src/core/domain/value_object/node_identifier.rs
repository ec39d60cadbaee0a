use crate::core::domain::error::ValidationError;
use std::fmt;

const MAX_IDENTIFIER_LENGTH: usize = 255;

/// A node name or UUID, as accepted by `GET /v1/nodes/{node_ident}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIdentifier(String);

impl NodeIdentifier {
    /// Validates a node name or UUID.
    pub fn new(identifier: &str) -> Result<Self, ValidationError> {
        validate_node_identifier(identifier)?;
        Ok(Self::new_unchecked(identifier.trim().to_string()))
    }

    /// Creates a new identifier without validation.
    pub(crate) fn new_unchecked(identifier: String) -> Self {
        Self(identifier)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the identifier is shaped like a UUID rather than a name.
    #[must_use]
    pub fn is_uuid(&self) -> bool {
        let groups: Vec<&str> = self.0.split('-').collect();
        groups.len() == 5
            && groups
                .iter()
                .zip([8, 4, 4, 4, 12])
                .all(|(g, len)| g.len() == len && g.chars().all(|c| c.is_ascii_hexdigit()))
    }
}

impl fmt::Display for NodeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates a node identifier.
pub(crate) fn validate_node_identifier(identifier: &str) -> Result<(), ValidationError> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(ValidationError::Field {
            field: "node".to_string(),
            message: "Node name or UUID cannot be empty".to_string(),
        });
    }
    if identifier.len() > MAX_IDENTIFIER_LENGTH {
        return Err(ValidationError::Format(format!(
            "Node identifier exceeds maximum length of {} characters",
            MAX_IDENTIFIER_LENGTH
        )));
    }
    Ok(())
}
