use crate::{
    core::{
        domain::{
            error::{IronicError, IronicResult},
            model::{baremetal_node::BaremetalNode, node::Node},
            value_object::NodeIdentifier,
        },
        infrastructure::baremetal_api::BaremetalApi,
    },
    inventory::application::query::node_info_query::NodeInfoQuery,
};
use tracing::{debug, info, warn};

/// Message reported when a requested node or MAC address resolves to nothing.
pub const NODE_NOT_FOUND: &str = "The baremetal node was not found";

/// Resolves the requested nodes and enriches each with its ports and port
/// groups.
///
/// Nodes are processed one after another and the first failure aborts the
/// whole query; no partial result is ever returned.
#[derive(Debug, Default)]
pub struct NodeInfoService;

impl NodeInfoService {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(
        &self,
        api: &dyn BaremetalApi,
        query: &NodeInfoQuery,
    ) -> IronicResult<Vec<BaremetalNode>> {
        let nodes = self.resolve_nodes(api, query).await?;
        info!(count = nodes.len(), "Resolved baremetal nodes");

        let mut enriched = Vec::with_capacity(nodes.len());
        for node in nodes {
            enriched.push(self.enrich_node(api, node).await?);
        }
        Ok(enriched)
    }

    /// Determines the target node set.
    ///
    /// A `node` or `mac` that resolves to nothing is an error; listing every
    /// node succeeds even when there are none.
    pub async fn resolve_nodes(
        &self,
        api: &dyn BaremetalApi,
        query: &NodeInfoQuery,
    ) -> IronicResult<Vec<Node>> {
        let node = if let Some(ident) = &query.node {
            debug!(node = %ident, uuid = ident.is_uuid(), "Looking up node");
            api.find_node(ident).await?
        } else if let Some(mac) = &query.mac {
            debug!(mac = %mac, "Looking up node by port address");
            let owners = api.ports_by_address(mac).await?;
            if owners.len() > 1 {
                warn!(
                    mac = %mac,
                    matches = owners.len(),
                    "Several ports share this address, using the first one returned"
                );
            }
            match owners.into_iter().next() {
                Some(owner) => {
                    api.find_node(&NodeIdentifier::new_unchecked(owner.node_id))
                        .await?
                }
                None => None,
            }
        } else {
            return api.nodes().await;
        };

        node.map(|n| vec![n])
            .ok_or_else(|| IronicError::NotFound(NODE_NOT_FOUND.to_string()))
    }

    /// Attaches the node's ports and port groups, nesting member ports in
    /// their group without any further API calls.
    pub async fn enrich_node(
        &self,
        api: &dyn BaremetalApi,
        node: Node,
    ) -> IronicResult<BaremetalNode> {
        let ports = api.ports(&node.id).await?;
        let port_groups = api.port_groups(&node.id).await?;
        debug!(
            node = %node.id,
            ports = ports.len(),
            port_groups = port_groups.len(),
            "Fetched node network configuration"
        );
        Ok(BaremetalNode::assemble(node, ports, port_groups))
    }
}
