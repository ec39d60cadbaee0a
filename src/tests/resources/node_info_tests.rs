use super::fixtures::*;
use crate::{IronicClient, IronicError, NODE_NOT_FOUND, NodeInfoQuery, NodeInfoResponse};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

async fn mount_node_network(mock_server: &MockServer, node_uuid: &str) {
    Mock::given(method("GET"))
        .and(path("/v1/ports/detail"))
        .and(query_param("node_uuid", node_uuid))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ports": [
                port_json("port-a1", node_uuid, "52:54:00:00:10:a1", Some(PORT_GROUP_UUID)),
                port_json("port-a2", node_uuid, "52:54:00:00:10:a2", Some(PORT_GROUP_UUID)),
                port_json("port-pxe", node_uuid, "52:54:00:00:10:ff", None)
            ]
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/portgroups/detail"))
        .and(query_param("node", node_uuid))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "portgroups": [port_group_json(PORT_GROUP_UUID, node_uuid)]
        })))
        .mount(mock_server)
        .await;
}

async fn mount_bare_node_network(mock_server: &MockServer, node_uuid: &str) {
    Mock::given(method("GET"))
        .and(path("/v1/ports/detail"))
        .and(query_param("node_uuid", node_uuid))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ports": []})))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/portgroups/detail"))
        .and(query_param("node", node_uuid))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"portgroups": []})))
        .mount(mock_server)
        .await;
}

fn query(node: Option<&str>, mac: Option<&str>) -> NodeInfoQuery {
    NodeInfoQuery::from_options(node, mac).unwrap()
}

#[tokio::test]
async fn test_node_info_by_uuid() {
    let mock_server = MockServer::start().await;
    let client = create_noauth_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(format!("/v1/nodes/{NODE_UUID}")))
        .and(header("X-OpenStack-Ironic-API-Version", "1.69"))
        .respond_with(ResponseTemplate::new(200).set_body_json(node_json(NODE_UUID, "compute-0")))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_node_network(&mock_server, NODE_UUID).await;

    let nodes = client
        .node_info(&query(Some(NODE_UUID), None))
        .await
        .unwrap();

    assert_eq!(nodes.len(), 1);
    let node = &nodes[0];
    assert_eq!(node.id(), NODE_UUID);
    assert_eq!(node.ports.len(), 3);
    assert_eq!(node.port_groups.len(), 1);

    let group = &node.port_groups[0];
    let members: Vec<&str> = group.ports.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(members, vec!["port-a1", "port-a2"]);
}

#[tokio::test]
async fn test_node_info_payload_shape() {
    let mock_server = MockServer::start().await;
    let client = create_noauth_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/v1/nodes/compute-0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(node_json(NODE_UUID, "compute-0")))
        .mount(&mock_server)
        .await;
    mount_node_network(&mock_server, NODE_UUID).await;

    let nodes = client
        .node_info(&query(Some("compute-0"), None))
        .await
        .unwrap();
    let payload = serde_json::to_value(NodeInfoResponse::new(nodes)).unwrap();

    assert_eq!(payload["changed"], false);
    let node = &payload["baremetal_nodes"][0];
    assert_eq!(node["id"], NODE_UUID);
    assert_eq!(node["is_maintenance"], false);
    assert_eq!(node["instance_id"], serde_json::Value::Null);
    assert!(node.get("uuid").is_none());
    assert_eq!(node["ports"][2]["node_id"], NODE_UUID);
    assert_eq!(node["ports"][2]["port_group_id"], serde_json::Value::Null);
    assert_eq!(node["port_groups"][0]["id"], PORT_GROUP_UUID);
    assert_eq!(node["port_groups"][0]["is_standalone_ports_supported"], false);
    assert_eq!(node["port_groups"][0]["ports"][0]["port_group_id"], PORT_GROUP_UUID);
}

#[tokio::test]
async fn test_node_info_node_not_found() {
    let mock_server = MockServer::start().await;
    let client = create_noauth_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/v1/nodes/ghost"))
        .respond_with(ironic_error(404, "Node ghost could not be found."))
        .mount(&mock_server)
        .await;

    let result = client.node_info(&query(Some("ghost"), None)).await;
    match result {
        Err(IronicError::NotFound(msg)) => assert_eq!(msg, NODE_NOT_FOUND),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_node_info_invalid_name_not_found() {
    let mock_server = MockServer::start().await;
    let client = create_noauth_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/v1/nodes/compute%200"))
        .respond_with(ironic_error(
            400,
            "Expected a logical name or UUID but received compute 0.",
        ))
        .mount(&mock_server)
        .await;

    let result = client.node_info(&query(Some("compute 0"), None)).await;
    match result {
        Err(IronicError::NotFound(msg)) => assert_eq!(msg, NODE_NOT_FOUND),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_node_info_by_mac() {
    let mock_server = MockServer::start().await;
    let client = create_noauth_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/v1/ports"))
        .and(query_param("address", "52:54:00:00:10:ff"))
        .and(query_param("fields", "node_uuid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ports": [{"node_uuid": NODE_UUID, "links": []}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/nodes/{NODE_UUID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(node_json(NODE_UUID, "compute-0")))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_node_network(&mock_server, NODE_UUID).await;

    let nodes = client
        .node_info(&query(None, Some("52-54-00-00-10-FF")))
        .await
        .unwrap();

    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].id(), NODE_UUID);
    assert!(
        nodes[0]
            .ports
            .iter()
            .any(|p| p.address == "52:54:00:00:10:ff")
    );
}

#[tokio::test]
async fn test_node_info_unknown_mac() {
    let mock_server = MockServer::start().await;
    let client = create_noauth_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/v1/ports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ports": []})))
        .mount(&mock_server)
        .await;

    let result = client
        .node_info(&query(None, Some("52:54:00:de:ad:00")))
        .await;
    assert!(matches!(result, Err(IronicError::NotFound(_))));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_node_info_list_all() {
    let mock_server = MockServer::start().await;
    let client = create_noauth_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/v1/nodes/detail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "nodes": [
                node_json(NODE_UUID, "compute-0"),
                node_json(OTHER_NODE_UUID, "compute-1")
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_node_network(&mock_server, NODE_UUID).await;
    mount_bare_node_network(&mock_server, OTHER_NODE_UUID).await;

    let nodes = client.node_info(&NodeInfoQuery::all()).await.unwrap();

    let ids: Vec<&str> = nodes.iter().map(|n| n.id()).collect();
    assert_eq!(ids, vec![NODE_UUID, OTHER_NODE_UUID]);

    for node in &nodes {
        assert!(node.ports.iter().all(|p| p.node_id == node.id()));
        for group in &node.port_groups {
            assert_eq!(group.port_group.node_id, node.id());
            assert!(group.ports.iter().all(|p| {
                p.port_group_id.as_deref() == Some(group.port_group.id.as_str())
                    && node.ports.contains(p)
            }));
        }
    }
    assert!(nodes[1].ports.is_empty());
    assert!(nodes[1].port_groups.is_empty());
}

#[tokio::test]
async fn test_node_info_list_all_empty() {
    let mock_server = MockServer::start().await;
    let client = create_noauth_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/v1/nodes/detail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"nodes": []})))
        .mount(&mock_server)
        .await;

    let nodes = client.node_info(&NodeInfoQuery::all()).await.unwrap();
    assert!(nodes.is_empty());

    let payload = serde_json::to_value(NodeInfoResponse::new(nodes)).unwrap();
    assert_eq!(payload, json!({"changed": false, "baremetal_nodes": []}));
}

#[tokio::test]
async fn test_node_info_is_repeatable() {
    let mock_server = MockServer::start().await;
    let client = create_noauth_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(format!("/v1/nodes/{NODE_UUID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(node_json(NODE_UUID, "compute-0")))
        .mount(&mock_server)
        .await;
    mount_node_network(&mock_server, NODE_UUID).await;

    let query = query(Some(NODE_UUID), None);
    let first = client.node_info(&query).await.unwrap();
    let second = client.node_info(&query).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_node_info_upstream_failure_returns_no_partial_result() {
    let mock_server = MockServer::start().await;
    let client = create_noauth_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/v1/nodes/detail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "nodes": [
                node_json(NODE_UUID, "compute-0"),
                node_json(OTHER_NODE_UUID, "compute-1")
            ]
        })))
        .mount(&mock_server)
        .await;
    mount_node_network(&mock_server, NODE_UUID).await;
    Mock::given(method("GET"))
        .and(path("/v1/ports/detail"))
        .and(query_param("node_uuid", OTHER_NODE_UUID))
        .respond_with(ironic_error(503, "Conductor unavailable"))
        .mount(&mock_server)
        .await;

    let result = client.node_info(&NodeInfoQuery::all()).await;
    match result {
        Err(IronicError::Api { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "Conductor unavailable");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_node_info_with_keystone() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/identity/v3/auth/tokens"))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("X-Subject-Token", "gAAAAAB-token")
                .set_body_json(json!({
                    "token": {
                        "expires_at": "2099-01-01T00:00:00.000000Z",
                        "catalog": [{
                            "type": "baremetal",
                            "name": "ironic",
                            "endpoints": [{
                                "interface": "public",
                                "region_id": "RegionOne",
                                "region": "RegionOne",
                                "url": format!("{}/baremetal", mock_server.uri())
                            }]
                        }]
                    }
                })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/baremetal/v1/nodes/{NODE_UUID}")))
        .and(header("X-Auth-Token", "gAAAAAB-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(node_json(NODE_UUID, "compute-0")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/baremetal/v1/ports/detail"))
        .and(header("X-Auth-Token", "gAAAAAB-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ports": []})))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/baremetal/v1/portgroups/detail"))
        .and(header("X-Auth-Token", "gAAAAAB-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"portgroups": []})))
        .mount(&mock_server)
        .await;

    let client = IronicClient::builder()
        .auth_url(format!("{}/identity", mock_server.uri()))
        .unwrap()
        .credentials("admin", "secret", "baremetal")
        .unwrap()
        .region("RegionOne")
        .build()
        .unwrap();

    let nodes = client
        .node_info(&query(Some(NODE_UUID), None))
        .await
        .unwrap();
    assert_eq!(nodes.len(), 1);
    assert!(client.is_authenticated().await);
}
