//! Domain model for bare metal nodes.
//!
//! Fields are deserialized from the Bare Metal REST API names (`uuid`,
//! `maintenance`, `instance_uuid`, ...) and serialized under the names the
//! node info payload exposes (`id`, `is_maintenance`, `instance_id`, ...).

use super::resource::{Collection, Link, Metadata};
use crate::core::domain::value_object::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};

/// A bare metal node as returned by `GET /v1/nodes/{node_ident}` or
/// `GET /v1/nodes/detail`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Node {
    /// The node UUID.
    #[serde(rename(deserialize = "uuid", serialize = "id"))]
    pub id: String,
    /// Human-readable unique name.
    #[serde(default)]
    pub name: Option<String>,
    /// UUID of the allocation associated with the node.
    #[serde(default, rename(deserialize = "allocation_uuid", serialize = "allocation_id"))]
    pub allocation_id: Option<String>,
    #[serde(default)]
    pub bios_interface: Option<String>,
    #[serde(default)]
    pub boot_interface: Option<String>,
    /// Boot mode reported by the node (`uefi`, `bios`).
    #[serde(default)]
    pub boot_mode: Option<String>,
    /// UUID of the chassis the node belongs to.
    #[serde(default, rename(deserialize = "chassis_uuid", serialize = "chassis_id"))]
    pub chassis_id: Option<String>,
    /// The current clean step, if cleaning.
    #[serde(default)]
    pub clean_step: Option<Metadata>,
    /// Conductor currently servicing the node.
    #[serde(default)]
    pub conductor: Option<String>,
    #[serde(default)]
    pub conductor_group: Option<String>,
    #[serde(default)]
    pub console_interface: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub deploy_interface: Option<String>,
    /// The current deploy step, if deploying.
    #[serde(default)]
    pub deploy_step: Option<Metadata>,
    #[serde(default)]
    pub description: Option<String>,
    /// Hardware driver name (e.g. `ipmi`, `redfish`).
    #[serde(default)]
    pub driver: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub driver_info: Metadata,
    #[serde(default, deserialize_with = "null_as_default")]
    pub driver_internal_info: Metadata,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extra: Metadata,
    /// Fault that moved the node into maintenance, if any.
    #[serde(default)]
    pub fault: Option<String>,
    #[serde(default)]
    pub inspect_interface: Option<String>,
    #[serde(default)]
    pub inspection_finished_at: Option<String>,
    #[serde(default)]
    pub inspection_started_at: Option<String>,
    /// UUID of the instance deployed on the node.
    #[serde(default, rename(deserialize = "instance_uuid", serialize = "instance_id"))]
    pub instance_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_info: Metadata,
    #[serde(
        default,
        rename(deserialize = "automated_clean", serialize = "is_automated_clean_enabled")
    )]
    pub is_automated_clean_enabled: Option<bool>,
    #[serde(
        default,
        rename(deserialize = "console_enabled", serialize = "is_console_enabled")
    )]
    pub is_console_enabled: bool,
    #[serde(default, rename(deserialize = "maintenance", serialize = "is_maintenance"))]
    pub is_maintenance: bool,
    #[serde(default, rename(deserialize = "protected", serialize = "is_protected"))]
    pub is_protected: bool,
    #[serde(default, rename(deserialize = "retired", serialize = "is_retired"))]
    pub is_retired: Option<bool>,
    #[serde(default, rename(deserialize = "secure_boot", serialize = "is_secure_boot"))]
    pub is_secure_boot: Option<bool>,
    /// The last error reported by the conductor for this node.
    #[serde(default)]
    pub last_error: Option<String>,
    #[serde(default)]
    pub lessee: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<Link>,
    #[serde(default)]
    pub maintenance_reason: Option<String>,
    #[serde(default)]
    pub management_interface: Option<String>,
    #[serde(default)]
    pub network_interface: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub power_interface: Option<String>,
    /// Current power state (`power on`, `power off`, ...).
    #[serde(default)]
    pub power_state: Option<String>,
    /// Physical characteristics (`cpus`, `memory_mb`, `capabilities`, ...).
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Metadata,
    #[serde(default)]
    pub protected_reason: Option<String>,
    /// Provision state (`available`, `deploying`, `active`, ...).
    #[serde(default)]
    pub provision_state: Option<String>,
    #[serde(default)]
    pub provision_updated_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub raid_config: Metadata,
    #[serde(default)]
    pub raid_interface: Option<String>,
    #[serde(default)]
    pub rescue_interface: Option<String>,
    /// Name of the conductor holding the node lock, if any.
    #[serde(default)]
    pub reservation: Option<String>,
    #[serde(default)]
    pub resource_class: Option<String>,
    #[serde(default)]
    pub retired_reason: Option<String>,
    #[serde(default)]
    pub storage_interface: Option<String>,
    #[serde(default)]
    pub target_power_state: Option<String>,
    #[serde(default)]
    pub target_provision_state: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target_raid_config: Metadata,
    #[serde(default, deserialize_with = "null_as_default")]
    pub traits: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub vendor_interface: Option<String>,
    /// Hypermedia links to the node's ports; replaced by inline ports on output.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        rename(deserialize = "ports"),
        skip_serializing
    )]
    pub port_links: Vec<Link>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        rename(deserialize = "portgroups"),
        skip_serializing
    )]
    pub port_group_links: Vec<Link>,
    /// Fields not modelled above (`network_data`, `shard`, `parent_node`, ...),
    /// passed through unchanged.
    #[serde(flatten)]
    pub other: Metadata,
}

/// A page of `GET /v1/nodes/detail`.
#[derive(Debug, Deserialize)]
pub struct NodeCollection {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub next: Option<String>,
}

impl Collection for NodeCollection {
    type Item = Node;

    fn into_page(self) -> (Vec<Node>, Option<String>) {
        (self.nodes, self.next)
    }
}
