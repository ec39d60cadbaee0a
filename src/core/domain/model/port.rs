//! Domain model for bare metal ports (network interfaces of a node).

use super::resource::{Collection, Link, Metadata};
use crate::core::domain::value_object::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};

/// A port as returned by `GET /v1/ports/detail`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Port {
    /// The port UUID.
    #[serde(rename(deserialize = "uuid", serialize = "id"))]
    pub id: String,
    /// Hardware (MAC) address of the interface.
    pub address: String,
    /// UUID of the node owning this port.
    #[serde(rename(deserialize = "node_uuid", serialize = "node_id"))]
    pub node_id: String,
    /// UUID of the port group this port belongs to, if any.
    #[serde(default, rename(deserialize = "portgroup_uuid", serialize = "port_group_id"))]
    pub port_group_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extra: Metadata,
    #[serde(default, deserialize_with = "null_as_default")]
    pub internal_info: Metadata,
    /// Whether PXE is enabled on this interface.
    #[serde(default, rename(deserialize = "pxe_enabled", serialize = "is_pxe_enabled"))]
    pub is_pxe_enabled: Option<bool>,
    #[serde(default)]
    pub is_smartnic: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<Link>,
    /// Switch connection details (`switch_id`, `port_id`, `switch_info`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub local_link_connection: Metadata,
    #[serde(default)]
    pub physical_network: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Fields not modelled above (`name` on newer microversions, ...),
    /// passed through unchanged.
    #[serde(flatten)]
    pub other: Metadata,
}

impl Port {
    /// Returns true when this port is a member of the given port group.
    #[must_use]
    pub fn belongs_to(&self, port_group_id: &str) -> bool {
        self.port_group_id.as_deref() == Some(port_group_id)
    }
}

/// A page of `GET /v1/ports/detail`.
#[derive(Debug, Deserialize)]
pub struct PortCollection {
    pub ports: Vec<Port>,
    #[serde(default)]
    pub next: Option<String>,
}

impl Collection for PortCollection {
    type Item = Port;

    fn into_page(self) -> (Vec<Port>, Option<String>) {
        (self.ports, self.next)
    }
}

/// The owning node of a port, from `GET /v1/ports?address=..&fields=node_uuid`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PortOwner {
    #[serde(rename = "node_uuid")]
    pub node_id: String,
}

/// A page of `GET /v1/ports` restricted to the `node_uuid` field.
#[derive(Debug, Deserialize)]
pub struct PortOwnerCollection {
    pub ports: Vec<PortOwner>,
    #[serde(default)]
    pub next: Option<String>,
}

impl Collection for PortOwnerCollection {
    type Item = PortOwner;

    fn into_page(self) -> (Vec<PortOwner>, Option<String>) {
        (self.ports, self.next)
    }
}
