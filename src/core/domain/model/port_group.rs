//! Domain model for port groups (bonded interfaces of a node).

use super::resource::{Collection, Link, Metadata};
use crate::core::domain::value_object::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};

/// A port group as returned by `GET /v1/portgroups/detail`.
///
/// The API's `ports` link list is read but not serialized; member ports are
/// attached inline by [`PortGroupDetails`](super::baremetal_node::PortGroupDetails).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PortGroup {
    /// The port group UUID.
    #[serde(rename(deserialize = "uuid", serialize = "id"))]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// MAC address of the bond.
    #[serde(default)]
    pub address: Option<String>,
    /// UUID of the node owning this port group.
    #[serde(rename(deserialize = "node_uuid", serialize = "node_id"))]
    pub node_id: String,
    /// Bonding mode (e.g. `active-backup`, `802.3ad`).
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extra: Metadata,
    #[serde(default, deserialize_with = "null_as_default")]
    pub internal_info: Metadata,
    #[serde(
        default,
        rename(
            deserialize = "standalone_ports_supported",
            serialize = "is_standalone_ports_supported"
        )
    )]
    pub is_standalone_ports_supported: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<Link>,
    /// Bonding properties passed to the network service.
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Metadata,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        rename(deserialize = "ports"),
        skip_serializing
    )]
    pub port_links: Vec<Link>,
    /// Fields not modelled above, passed through unchanged.
    #[serde(flatten)]
    pub other: Metadata,
}

/// A page of `GET /v1/portgroups/detail`.
#[derive(Debug, Deserialize)]
pub struct PortGroupCollection {
    pub portgroups: Vec<PortGroup>,
    #[serde(default)]
    pub next: Option<String>,
}

impl Collection for PortGroupCollection {
    type Item = PortGroup;

    fn into_page(self) -> (Vec<PortGroup>, Option<String>) {
        (self.portgroups, self.next)
    }
}
