use crate::core::domain::model::baremetal_node::BaremetalNode;
use serde::Serialize;

/// Successful result payload of the node info query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeInfoResponse {
    /// Always `false`: the query never modifies anything.
    pub changed: bool,
    pub baremetal_nodes: Vec<BaremetalNode>,
}

impl NodeInfoResponse {
    pub fn new(baremetal_nodes: Vec<BaremetalNode>) -> Self {
        Self {
            changed: false,
            baremetal_nodes,
        }
    }
}

/// Failure payload: a single message and no node list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureResponse {
    pub failed: bool,
    pub msg: String,
}

impl FailureResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            failed: true,
            msg: msg.into(),
        }
    }
}
