use crate::core::domain::{
    error::{IronicError, IronicResult, ValidationError},
    value_object::{IronicUrl, Password, Username},
};

/// The default Keystone endpoint interface used for catalog lookups.
pub const DEFAULT_INTERFACE: &str = "public";

/// Keystone v3 password credentials scoped to a project.
#[derive(Debug, Clone)]
pub struct KeystoneCredentials {
    auth_url: IronicUrl,
    username: Username,
    password: Password,
    project_name: String,
    user_domain_name: String,
    project_domain_name: String,
}

impl KeystoneCredentials {
    pub fn new(
        auth_url: IronicUrl,
        username: Username,
        password: Password,
        project_name: String,
        user_domain_name: String,
        project_domain_name: String,
    ) -> Self {
        Self {
            auth_url,
            username,
            password,
            project_name,
            user_domain_name,
            project_domain_name,
        }
    }

    pub fn auth_url(&self) -> &IronicUrl {
        &self.auth_url
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn user_domain_name(&self) -> &str {
        &self.user_domain_name
    }

    pub fn project_domain_name(&self) -> &str {
        &self.project_domain_name
    }
}

/// How requests to the Bare Metal API are authenticated.
#[derive(Debug, Clone)]
pub enum AuthMethod {
    /// Ironic running in `noauth` mode; the endpoint must be given explicitly.
    None,
    /// Keystone v3 password authentication.
    Password(KeystoneCredentials),
}

/// Everything needed to reach the Bare Metal API.
#[derive(Debug, Clone)]
pub struct IronicConnection {
    auth: AuthMethod,
    endpoint_override: Option<IronicUrl>,
    region_name: Option<String>,
    interface: String,
    accept_invalid_certs: bool,
}

impl IronicConnection {
    /// Creates a connection description.
    ///
    /// # Errors
    /// Returns a validation error when `noauth` is requested without an
    /// explicit endpoint, since there is no catalog to discover it from.
    pub fn new(
        auth: AuthMethod,
        endpoint_override: Option<IronicUrl>,
        region_name: Option<String>,
        interface: Option<String>,
        accept_invalid_certs: bool,
    ) -> IronicResult<Self> {
        if matches!(auth, AuthMethod::None) && endpoint_override.is_none() {
            return Err(IronicError::from(ValidationError::Field {
                field: "ironic_url".to_string(),
                message: "An Ironic endpoint is required when authentication is disabled"
                    .to_string(),
            }));
        }
        Ok(Self {
            auth,
            endpoint_override,
            region_name,
            interface: interface.unwrap_or_else(|| DEFAULT_INTERFACE.to_string()),
            accept_invalid_certs,
        })
    }

    pub fn auth(&self) -> &AuthMethod {
        &self.auth
    }

    pub fn endpoint_override(&self) -> Option<&IronicUrl> {
        self.endpoint_override.as_ref()
    }

    pub fn region_name(&self) -> Option<&str> {
        self.region_name.as_deref()
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    pub fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }
}
