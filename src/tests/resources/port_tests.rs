use super::fixtures::*;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

#[tokio::test]
async fn test_ports_for_node() {
    let mock_server = MockServer::start().await;
    let client = create_noauth_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/v1/ports/detail"))
        .and(query_param("node_uuid", NODE_UUID))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ports": [
                port_json("port-1", NODE_UUID, "52:54:00:00:00:01", None),
                port_json("port-2", NODE_UUID, "52:54:00:00:00:02", Some(PORT_GROUP_UUID))
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ports = client.ports(NODE_UUID).await.unwrap();
    assert_eq!(ports.len(), 2);
    assert_eq!(ports[0].address, "52:54:00:00:00:01");
    assert_eq!(ports[0].is_pxe_enabled, Some(true));
    assert_eq!(ports[0].port_group_id, None);
    assert_eq!(ports[1].port_group_id.as_deref(), Some(PORT_GROUP_UUID));
    assert_eq!(ports[1].physical_network.as_deref(), Some("provisioning"));
    assert!(ports.iter().all(|p| p.node_id == NODE_UUID));
}

#[tokio::test]
async fn test_ports_paginated() {
    let mock_server = MockServer::start().await;
    let client = create_noauth_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/v1/ports/detail"))
        .and(query_param("marker", "port-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ports": [port_json("port-2", NODE_UUID, "52:54:00:00:00:02", None)]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/ports/detail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ports": [port_json("port-1", NODE_UUID, "52:54:00:00:00:01", None)],
            "next": format!(
                "{}/v1/ports/detail?node_uuid={}&limit=1&marker=port-1",
                mock_server.uri(),
                NODE_UUID
            )
        })))
        .mount(&mock_server)
        .await;

    let ports = client.ports(NODE_UUID).await.unwrap();
    let ids: Vec<&str> = ports.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["port-1", "port-2"]);
}

#[tokio::test]
async fn test_port_groups_for_node() {
    let mock_server = MockServer::start().await;
    let client = create_noauth_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/v1/portgroups/detail"))
        .and(query_param("node", NODE_UUID))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "portgroups": [port_group_json(PORT_GROUP_UUID, NODE_UUID)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let groups = client.port_groups(NODE_UUID).await.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].id, PORT_GROUP_UUID);
    assert_eq!(groups[0].name.as_deref(), Some("bond0"));
    assert_eq!(groups[0].mode.as_deref(), Some("802.3ad"));
    assert_eq!(groups[0].is_standalone_ports_supported, Some(false));
    assert_eq!(groups[0].properties["miimon"], "100");
}
