//! The Bare Metal operations the node info query depends on.

use crate::core::{
    domain::{
        error::IronicResult,
        model::{
            node::{Node, NodeCollection},
            port::{Port, PortCollection, PortOwner, PortOwnerCollection},
            port_group::{PortGroup, PortGroupCollection},
        },
        value_object::{MacAddress, NodeIdentifier},
    },
    infrastructure::api_client::ApiClient,
};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tracing::debug;

/// Read access to nodes, ports and port groups of a Bare Metal service.
///
/// All list operations return fully detailed records and exhaust pagination.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BaremetalApi: Send + Sync {
    /// Looks a node up by name or UUID. `Ok(None)` when it does not exist or
    /// the identifier is not a valid node name.
    async fn find_node(&self, ident: &NodeIdentifier) -> IronicResult<Option<Node>>;

    /// Lists every node with full detail.
    async fn nodes(&self) -> IronicResult<Vec<Node>>;

    /// Lists the owners of ports with the given hardware address.
    async fn ports_by_address(&self, address: &MacAddress) -> IronicResult<Vec<PortOwner>>;

    /// Lists every port of a node with full detail.
    async fn ports(&self, node_id: &str) -> IronicResult<Vec<Port>>;

    /// Lists every port group of a node with full detail.
    async fn port_groups(&self, node_id: &str) -> IronicResult<Vec<PortGroup>>;
}

#[async_trait]
impl BaremetalApi for ApiClient {
    async fn find_node(&self, ident: &NodeIdentifier) -> IronicResult<Option<Node>> {
        match self.get::<Node>(&["v1", "nodes", ident.as_str()], &[]).await {
            Ok(node) => Ok(Some(node)),
            Err(e) if e.is_not_found_status() || e.is_bad_request_status() => {
                debug!(node = %ident, error = %e, "Node does not exist");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn nodes(&self) -> IronicResult<Vec<Node>> {
        self.list_all::<NodeCollection>(&["v1", "nodes", "detail"], &[])
            .await
    }

    async fn ports_by_address(&self, address: &MacAddress) -> IronicResult<Vec<PortOwner>> {
        self.list_all::<PortOwnerCollection>(
            &["v1", "ports"],
            &[("address", address.as_str()), ("fields", "node_uuid")],
        )
        .await
    }

    async fn ports(&self, node_id: &str) -> IronicResult<Vec<Port>> {
        self.list_all::<PortCollection>(&["v1", "ports", "detail"], &[("node_uuid", node_id)])
            .await
    }

    async fn port_groups(&self, node_id: &str) -> IronicResult<Vec<PortGroup>> {
        self.list_all::<PortGroupCollection>(&["v1", "portgroups", "detail"], &[("node", node_id)])
            .await
    }
}
