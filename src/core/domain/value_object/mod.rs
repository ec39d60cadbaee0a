mod api_version;
mod auth_token;
mod ironic_url;
mod mac_address;
mod node_identifier;
mod password;
pub mod serde_helpers;
mod username;

pub use api_version::{ApiVersion, DEFAULT_API_VERSION};
pub use auth_token::AuthToken;
pub use ironic_url::IronicUrl;
pub use mac_address::MacAddress;
pub use node_identifier::NodeIdentifier;
pub use password::Password;
pub use username::Username;

// Re-export validation functions for internal use
pub(crate) use password::validate_password;
pub(crate) use username::validate_username;
