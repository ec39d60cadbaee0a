mod auth;
mod core;
mod inventory;

#[cfg(test)]
mod tests;

pub use crate::core::domain::{
    error::{IronicError, IronicResult, ValidationError},
    model::{
        baremetal_node::{BaremetalNode, PortGroupDetails},
        client_config::{ClientConfig, RateLimitConfig},
        node::Node,
        port::Port,
        port_group::PortGroup,
        resource::{Link, Metadata},
    },
    value_object::{ApiVersion, DEFAULT_API_VERSION, IronicUrl, MacAddress, NodeIdentifier},
};
pub use crate::core::infrastructure::{baremetal_api::BaremetalApi, clouds_config::CloudConfig};
pub use crate::inventory::application::{
    query::node_info_query::NodeInfoQuery,
    response::node_info_response::{FailureResponse, NodeInfoResponse},
    service::node_info_service::{NODE_NOT_FOUND, NodeInfoService},
};

use crate::core::{
    domain::{
        model::ironic_connection::{AuthMethod, IronicConnection, KeystoneCredentials},
        value_object::{Password, Username, validate_password, validate_username},
    },
    infrastructure::api_client::ApiClient,
};
use std::time::Duration;

const DEFAULT_DOMAIN: &str = "Default";

/// A client for querying the OpenStack Bare Metal (Ironic) API
///
/// This client provides:
/// - Keystone password or `noauth` access to the Bare Metal API
/// - Node, port and port group lookups
/// - The node info query: nodes enriched with their ports and port groups
///
/// # Examples
///
/// ```no_run
/// use ironic_node_info::{IronicClient, IronicResult, NodeInfoQuery};
///
/// #[tokio::main]
/// async fn main() -> IronicResult<()> {
///     let client = IronicClient::builder()
///         .auth_url("https://keystone.example.com:5000/v3")?
///         .credentials("admin", "password", "baremetal")?
///         .region("RegionOne")
///         .build()?;
///
///     let query = NodeInfoQuery::from_options(Some("compute-0"), None)?;
///     let nodes = client.node_info(&query).await?;
///     println!("{} ports", nodes[0].ports.len());
///     Ok(())
/// }
/// ```
pub struct IronicClient {
    pub(crate) api_client: ApiClient,
}

/// Builder for IronicClient configuration
#[derive(Debug, Default)]
pub struct IronicClientBuilder {
    endpoint: Option<IronicUrl>,
    auth_url: Option<IronicUrl>,
    username: Option<String>,
    password: Option<String>,
    project_name: Option<String>,
    user_domain_name: Option<String>,
    project_domain_name: Option<String>,
    region_name: Option<String>,
    interface: Option<String>,
    noauth: bool,
    accept_invalid_certs: bool,
    config: ClientConfig,
}

impl IronicClientBuilder {
    /// Bare Metal endpoint. Without Keystone credentials this selects
    /// `noauth` mode; with them it overrides the catalog endpoint.
    pub fn endpoint(mut self, endpoint: impl AsRef<str>) -> IronicResult<Self> {
        self.endpoint = Some(IronicUrl::new(endpoint.as_ref())?);
        Ok(self)
    }

    /// Keystone identity endpoint, with or without the `/v3` suffix.
    pub fn auth_url(mut self, auth_url: impl AsRef<str>) -> IronicResult<Self> {
        self.auth_url = Some(IronicUrl::new(auth_url.as_ref())?);
        Ok(self)
    }

    pub fn credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        project_name: impl Into<String>,
    ) -> IronicResult<Self> {
        let username = username.into();
        let password = password.into();
        validate_username(&username)?;
        validate_password(&password)?;
        self.username = Some(username);
        self.password = Some(password);
        self.project_name = Some(project_name.into());
        Ok(self)
    }

    pub fn user_domain(mut self, domain: impl Into<String>) -> Self {
        self.user_domain_name = Some(domain.into());
        self
    }

    pub fn project_domain(mut self, domain: impl Into<String>) -> Self {
        self.project_domain_name = Some(domain.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region_name = Some(region.into());
        self
    }

    /// Catalog interface to use (`public`, `internal`, `admin`).
    pub fn interface(mut self, interface: impl Into<String>) -> Self {
        self.interface = Some(interface.into());
        self
    }

    /// Bare Metal API microversion, e.g. `1.69`.
    pub fn api_version(mut self, version: &str) -> IronicResult<Self> {
        self.config.api_version = ApiVersion::parse(version)?;
        Ok(self)
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.config.rate_limit = Some(rate_limit);
        self
    }

    pub fn token_lifetime(mut self, lifetime: Duration) -> Self {
        self.config.token_lifetime = lifetime;
        self
    }

    /// Applies a `clouds.yaml` entry. Values already set on the builder win.
    pub fn cloud(mut self, cloud: &CloudConfig) -> IronicResult<Self> {
        if self.endpoint.is_none() {
            if let Some(endpoint) = cloud.endpoint() {
                self.endpoint = Some(IronicUrl::new(endpoint)?);
            }
        }
        if cloud.is_noauth() {
            self.noauth = true;
        } else {
            let auth = &cloud.auth;
            if self.auth_url.is_none() {
                if let Some(auth_url) = &auth.auth_url {
                    self.auth_url = Some(IronicUrl::new(auth_url)?);
                }
            }
            if self.username.is_none() {
                if let (Some(username), Some(password)) = (&auth.username, &auth.password) {
                    self = self.credentials(
                        username.clone(),
                        password.clone(),
                        auth.project_name.clone().unwrap_or_default(),
                    )?;
                }
            }
            self.user_domain_name = self
                .user_domain_name
                .or_else(|| auth.user_domain_name.clone());
            self.project_domain_name = self
                .project_domain_name
                .or_else(|| auth.project_domain_name.clone());
        }
        self.region_name = self.region_name.or_else(|| cloud.region_name.clone());
        self.interface = self.interface.or_else(|| cloud.interface.clone());
        if cloud.verify == Some(false) {
            self.accept_invalid_certs = true;
        }
        Ok(self)
    }

    pub fn build(self) -> IronicResult<IronicClient> {
        let auth = match (self.noauth, self.auth_url) {
            (false, Some(auth_url)) => {
                let username = self.username.ok_or_else(|| missing("username"))?;
                let password = self.password.ok_or_else(|| missing("password"))?;
                let project_name = self
                    .project_name
                    .filter(|p| !p.is_empty())
                    .ok_or_else(|| missing("project_name"))?;
                AuthMethod::Password(KeystoneCredentials::new(
                    auth_url,
                    Username::new_unchecked(username),
                    Password::new_unchecked(password),
                    project_name,
                    self.user_domain_name
                        .unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
                    self.project_domain_name
                        .unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
                ))
            }
            _ => AuthMethod::None,
        };

        let connection = IronicConnection::new(
            auth,
            self.endpoint,
            self.region_name,
            self.interface,
            self.accept_invalid_certs,
        )?;

        Ok(IronicClient {
            api_client: ApiClient::new(connection, self.config)?,
        })
    }
}

fn missing(field: &str) -> IronicError {
    IronicError::from(ValidationError::Field {
        field: field.to_string(),
        message: format!("{} is required for Keystone authentication", field),
    })
}

impl IronicClient {
    /// Creates a new builder for IronicClient configuration
    pub fn builder() -> IronicClientBuilder {
        IronicClientBuilder::default()
    }

    /// Establishes a session up front (Keystone token and catalog lookup).
    ///
    /// Queries authenticate lazily, so calling this is optional; it surfaces
    /// credential problems before any Bare Metal request is made.
    pub async fn login(&self) -> IronicResult<()> {
        self.api_client.authenticate().await
    }

    /// Returns true if the client holds a usable session
    pub async fn is_authenticated(&self) -> bool {
        self.api_client.is_authenticated().await
    }

    /// Runs the node info query: resolves the requested node(s) and attaches
    /// their ports and port groups.
    ///
    /// # Errors
    ///
    /// - `IronicError::NotFound` if a `node` or `mac` was given but matched nothing
    /// - any upstream error (connection, authentication, API status), in which
    ///   case no partial result is returned
    pub async fn node_info(&self, query: &NodeInfoQuery) -> IronicResult<Vec<BaremetalNode>> {
        NodeInfoService::new().execute(&self.api_client, query).await
    }

    /// Looks a node up by name or UUID.
    pub async fn find_node(&self, node: &str) -> IronicResult<Option<Node>> {
        let ident = NodeIdentifier::new(node)?;
        self.api_client.find_node(&ident).await
    }

    /// Lists every node with full detail.
    pub async fn nodes(&self) -> IronicResult<Vec<Node>> {
        self.api_client.nodes().await
    }

    /// Lists the ports of a node.
    pub async fn ports(&self, node_id: &str) -> IronicResult<Vec<Port>> {
        self.api_client.ports(node_id).await
    }

    /// Lists the port groups of a node.
    pub async fn port_groups(&self, node_id: &str) -> IronicResult<Vec<PortGroup>> {
        self.api_client.port_groups(node_id).await
    }
}
