use thiserror::Error;

/// The main error type for Ironic operations.
///
/// This enum represents all possible errors that can occur while
/// talking to the Bare Metal service, including connection,
/// authentication, validation and lookup failures.
#[derive(Error, Debug)]
pub enum IronicError {
    /// Represents errors that occur while reaching the service
    ///
    /// # Fields
    /// * `0` - A description of what went wrong during the request
    #[error("Connection error: {0}")]
    Connection(String),

    /// Represents authentication failures against Keystone
    ///
    /// # Fields
    /// * `0` - A description of the authentication failure
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Represents validation failures with detailed context
    ///
    /// # Fields
    /// * `source` - The underlying validation error
    #[error("Validation error: {source}")]
    Validation { source: ValidationError },

    /// A requested node (by name, UUID or MAC address) does not exist
    #[error("{0}")]
    NotFound(String),

    /// The Bare Metal API answered with a non-success status
    ///
    /// # Fields
    /// * `status` - HTTP status code
    /// * `message` - The fault string reported by Ironic, or the raw body
    #[error("Ironic API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid or incomplete client configuration (clouds.yaml, catalog lookup)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl IronicError {
    /// Returns true for a `404 Not Found` answer from the API.
    pub fn is_not_found_status(&self) -> bool {
        matches!(self, IronicError::Api { status: 404, .. })
    }

    /// Returns true for a `400 Bad Request` answer from the API.
    pub fn is_bad_request_status(&self) -> bool {
        matches!(self, IronicError::Api { status: 400, .. })
    }
}

impl From<ValidationError> for IronicError {
    fn from(error: ValidationError) -> Self {
        IronicError::Validation { source: error }
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with an IronicError
pub type IronicResult<T> = Result<T, IronicError>;
