// Integration tests for `GraphqlClient` using wiremock.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use meshgate_api::types::{ResourceCreateRequest, ResourceUpdateRequest};
use meshgate_api::{Error, GraphqlClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, GraphqlClient) {
    let server = MockServer::start().await;
    let client = GraphqlClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn graphql(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": data }))
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_create_resource() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/graphql/"))
        .and(body_string_contains("resourceCreate"))
        .respond_with(graphql(json!({
            "resourceCreate": {
                "ok": true,
                "error": null,
                "entity": { "id": "UmVzb3VyY2U6MQ==", "isActive": true }
            }
        })))
        .mount(&server)
        .await;

    let req = ResourceCreateRequest {
        name: "wiki".into(),
        address: "wiki.internal".into(),
        remote_network_id: "TmV0d29yazox".into(),
        group_ids: vec![],
        protocols: None,
    };

    let created = client.create_resource(&req).await.unwrap();

    assert_eq!(created.id, "UmVzb3VyY2U6MQ==");
    assert!(created.is_active);
}

#[tokio::test]
async fn test_read_resource() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/graphql/"))
        .and(body_string_contains("ResourceRead"))
        .respond_with(graphql(json!({
            "resource": {
                "id": "UmVzb3VyY2U6MQ==",
                "name": "wiki",
                "address": "wiki.internal",
                "remoteNetwork": { "id": "TmV0d29yazox" },
                "groups": [{ "id": "R3JvdXA6MQ==" }],
                "protocols": {
                    "allowIcmp": true,
                    "tcp": { "policy": "RESTRICTED", "ports": ["80", "443"] },
                    "udp": { "policy": "ALLOW_ALL" }
                },
                "isActive": true
            }
        })))
        .mount(&server)
        .await;

    let node = client.read_resource("UmVzb3VyY2U6MQ==").await.unwrap().unwrap();

    assert_eq!(node.name, "wiki");
    assert_eq!(node.remote_network.id, "TmV0d29yazox");
    assert_eq!(node.groups.len(), 1);
    let protocols = node.protocols.unwrap();
    assert_eq!(protocols.tcp.policy, "RESTRICTED");
    assert_eq!(protocols.tcp.ports.as_deref(), Some(["80".to_string(), "443".to_string()].as_slice()));
    assert!(protocols.udp.ports.is_none());
}

#[tokio::test]
async fn test_read_resource_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/graphql/"))
        .respond_with(graphql(json!({ "resource": null })))
        .mount(&server)
        .await;

    let node = client.read_resource("bogus").await.unwrap();
    assert!(node.is_none());
}

#[tokio::test]
async fn test_delete_group() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/graphql/"))
        .and(body_string_contains("groupDelete"))
        .respond_with(graphql(json!({
            "groupDelete": { "ok": true, "error": null }
        })))
        .mount(&server)
        .await;

    client.delete_group("R3JvdXA6MQ==").await.unwrap();
}

#[tokio::test]
async fn test_create_remote_network() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/graphql/"))
        .and(body_string_contains("remoteNetworkCreate"))
        .respond_with(graphql(json!({
            "remoteNetworkCreate": {
                "ok": true,
                "error": null,
                "entity": { "id": "TmV0d29yazox" }
            }
        })))
        .mount(&server)
        .await;

    let node = client.create_remote_network("on-prem").await.unwrap();
    assert_eq!(node.id, "TmV0d29yazox");
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_rejected_update_names_the_resource() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/graphql/"))
        .and(body_string_contains("resourceUpdate"))
        .respond_with(graphql(json!({
            "resourceUpdate": {
                "ok": false,
                "error": "group ids are invalid",
                "entity": null
            }
        })))
        .mount(&server)
        .await;

    let req = ResourceUpdateRequest {
        id: "UmVzb3VyY2U6MQ==".into(),
        name: None,
        address: None,
        group_ids: Some(vec!["foo".into(), "bar".into()]),
        protocols: None,
    };

    let err = client.update_resource(&req).await.unwrap_err();

    match err {
        Error::Rejected { ref operation, ref message } => {
            assert_eq!(operation, "update resource with id UmVzb3VyY2U6MQ==");
            assert_eq!(message, "group ids are invalid");
        }
        other => panic!("expected Rejected, got: {other:?}"),
    }
    assert!(
        err.to_string()
            .contains("failed to update resource with id")
    );
}

#[tokio::test]
async fn test_graphql_top_level_errors() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/graphql/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [
                { "message": "unknown field" },
                { "message": "syntax error" }
            ]
        })))
        .mount(&server)
        .await;

    let result = client.read_group("R3JvdXA6MQ==").await;

    match result {
        Err(Error::Graphql { ref message }) => {
            assert_eq!(message, "unknown field; syntax error");
        }
        other => panic!("expected Graphql error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_401_unauthorized() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.read_resource("UmVzb3VyY2U6MQ==").await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication, got: {result:?}"
    );
}

#[tokio::test]
async fn test_undecodable_body_keeps_raw_text() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway error</html>"))
        .mount(&server)
        .await;

    let result = client.read_resource("UmVzb3VyY2U6MQ==").await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => {
            assert!(body.contains("gateway error"));
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
