//! The enriched node record returned by the node info query.

use super::{node::Node, port::Port, port_group::PortGroup};
use serde::Serialize;

/// A port group together with the ports that are members of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortGroupDetails {
    #[serde(flatten)]
    pub port_group: PortGroup,
    /// Ports whose `port_group_id` equals this group's `id`.
    pub ports: Vec<Port>,
}

/// A node with its ports and port groups embedded inline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaremetalNode {
    #[serde(flatten)]
    pub node: Node,
    /// Every port of the node.
    pub ports: Vec<Port>,
    /// Every port group of the node, each with its member ports.
    pub port_groups: Vec<PortGroupDetails>,
}

impl BaremetalNode {
    /// Combines a node with the ports and port groups fetched for it.
    ///
    /// Group membership is resolved in memory against `ports`; a port with no
    /// group, or with a group that was not returned, only appears in the
    /// node-level `ports` list.
    pub fn assemble(node: Node, ports: Vec<Port>, port_groups: Vec<PortGroup>) -> Self {
        let port_groups = port_groups
            .into_iter()
            .map(|port_group| {
                let members = ports
                    .iter()
                    .filter(|port| port.belongs_to(&port_group.id))
                    .cloned()
                    .collect();
                PortGroupDetails {
                    port_group,
                    ports: members,
                }
            })
            .collect();

        Self {
            node,
            ports,
            port_groups,
        }
    }

    /// The node UUID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.node.id
    }
}
