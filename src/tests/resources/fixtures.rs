//! Shared wiremock fixtures mirroring Bare Metal API payloads.

use crate::IronicClient;
use serde_json::{Value, json};
use wiremock::{MockServer, ResponseTemplate};

pub const NODE_UUID: &str = "1be26c0b-03f2-4d2e-ae87-c02d7f33c123";
pub const OTHER_NODE_UUID: &str = "4b8a3f6e-9d0c-4c55-bb7a-6b1f2c0e9a10";
pub const PORT_GROUP_UUID: &str = "c2c4a0f1-5a2a-4c57-a2c8-0cf8f1c1b3d4";

pub fn create_noauth_client(mock_server: &MockServer) -> IronicClient {
    IronicClient::builder()
        .endpoint(mock_server.uri())
        .unwrap()
        .build()
        .unwrap()
}

pub fn node_json(uuid: &str, name: &str) -> Value {
    json!({
        "uuid": uuid,
        "name": name,
        "instance_uuid": null,
        "power_state": "power off",
        "provision_state": "available",
        "target_power_state": null,
        "target_provision_state": null,
        "maintenance": false,
        "maintenance_reason": null,
        "console_enabled": false,
        "protected": false,
        "retired": false,
        "automated_clean": null,
        "driver": "ipmi",
        "driver_info": {"ipmi_address": "10.10.0.5", "ipmi_username": "admin"},
        "properties": {"cpus": 32, "memory_mb": 131072, "local_gb": 800},
        "resource_class": "baremetal.large",
        "traits": [],
        "extra": {},
        "created_at": "2026-09-01T10:00:00+00:00",
        "updated_at": null,
        "links": [
            {"href": format!("http://ironic/v1/nodes/{uuid}"), "rel": "self"},
            {"href": format!("http://ironic/nodes/{uuid}"), "rel": "bookmark"}
        ],
        "ports": [{"href": format!("http://ironic/v1/nodes/{uuid}/ports"), "rel": "self"}],
        "portgroups": [{"href": format!("http://ironic/v1/nodes/{uuid}/portgroups"), "rel": "self"}]
    })
}

pub fn port_json(uuid: &str, node_uuid: &str, address: &str, group: Option<&str>) -> Value {
    json!({
        "uuid": uuid,
        "address": address,
        "node_uuid": node_uuid,
        "portgroup_uuid": group,
        "pxe_enabled": group.is_none(),
        "local_link_connection": {"switch_id": "0a:1b:2c:3d:4e:5f", "port_id": "Ethernet1/7"},
        "physical_network": "provisioning",
        "internal_info": {},
        "extra": {},
        "is_smartnic": false,
        "created_at": "2026-09-01T10:00:00+00:00",
        "updated_at": null,
        "links": [{"href": format!("http://ironic/v1/ports/{uuid}"), "rel": "self"}]
    })
}

pub fn port_group_json(uuid: &str, node_uuid: &str) -> Value {
    json!({
        "uuid": uuid,
        "name": "bond0",
        "address": "52:54:00:00:10:01",
        "node_uuid": node_uuid,
        "mode": "802.3ad",
        "properties": {"miimon": "100", "xmit_hash_policy": "layer3+4"},
        "standalone_ports_supported": false,
        "internal_info": {},
        "extra": {},
        "created_at": "2026-09-01T10:00:00+00:00",
        "updated_at": null,
        "links": [{"href": format!("http://ironic/v1/portgroups/{uuid}"), "rel": "self"}],
        "ports": [{"href": format!("http://ironic/v1/portgroups/{uuid}/ports"), "rel": "self"}]
    })
}

/// An Ironic-style error response: the fault is JSON encoded inside
/// `error_message`.
pub fn ironic_error(status: u16, faultstring: &str) -> ResponseTemplate {
    let inner = json!({"faultstring": faultstring, "faultcode": "Client", "debuginfo": null});
    ResponseTemplate::new(status).set_body_json(json!({"error_message": inner.to_string()}))
}
