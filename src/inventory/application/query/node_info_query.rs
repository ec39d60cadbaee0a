use crate::core::domain::{
    error::IronicResult,
    value_object::{MacAddress, NodeIdentifier},
};

/// Selects which nodes the node info query returns.
///
/// `node` takes precedence over `mac`; with neither set every node is listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeInfoQuery {
    pub node: Option<NodeIdentifier>,
    pub mac: Option<MacAddress>,
}

impl NodeInfoQuery {
    /// Query for every node.
    pub fn all() -> Self {
        Self::default()
    }

    /// Query for a single node by name or UUID.
    pub fn by_node(node: NodeIdentifier) -> Self {
        Self {
            node: Some(node),
            mac: None,
        }
    }

    /// Query for the node owning a port with the given hardware address.
    pub fn by_mac(mac: MacAddress) -> Self {
        Self {
            node: None,
            mac: Some(mac),
        }
    }

    /// Builds a query from raw, optional user input.
    ///
    /// Empty strings count as absent, matching how unset options arrive from
    /// configuration files and environment variables.
    pub fn from_options(node: Option<&str>, mac: Option<&str>) -> IronicResult<Self> {
        let node = node
            .filter(|n| !n.trim().is_empty())
            .map(NodeIdentifier::new)
            .transpose()?;
        let mac = mac
            .filter(|m| !m.trim().is_empty())
            .map(MacAddress::new)
            .transpose()?;
        Ok(Self { node, mac })
    }

    /// Returns true when a specific node was requested, in which case finding
    /// nothing is an error rather than an empty result.
    pub fn is_targeted(&self) -> bool {
        self.node.is_some() || self.mac.is_some()
    }
}
