//! Relationship tool handlers
//!
//! CRUD against `/relationships`, plus the per-entity listing endpoint.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde_json::{Map, Value};

use super::{http_failure, parse_args, pretty_body, require_str, transport_failure, ToolResult};
use crate::mcp::tools::CreateRelationshipTool;
use crate::remote::RemoteClient;

/// Create a relationship between two entities. Defaults (`bidirectional:
/// false`, empty `properties`) are applied into the request body.
pub async fn create(client: Arc<RemoteClient>, args: Value) -> ToolResult {
    let tool_args: CreateRelationshipTool = parse_args(&args)?;
    let body = serde_json::to_value(&tool_args).map_err(|e| e.to_string())?;

    let resp = client
        .send(Method::POST, "/relationships", &[], Some(&body))
        .await
        .map_err(transport_failure)?;

    match resp.status {
        StatusCode::CREATED => Ok(format!(
            "Relationship created successfully:\n{}",
            pretty_body(&resp.body)?
        )),
        _ => Err(http_failure(&resp)),
    }
}

/// Retrieve a relationship by id.
pub async fn get(client: Arc<RemoteClient>, args: Value) -> ToolResult {
    let id = require_str(&args, "id")?;

    let resp = client
        .send(Method::GET, &format!("/relationships/{id}"), &[], None)
        .await
        .map_err(transport_failure)?;

    match resp.status {
        StatusCode::OK => pretty_body(&resp.body),
        StatusCode::NOT_FOUND => Err(format!("Relationship not found: {id}")),
        _ => Err(http_failure(&resp)),
    }
}

/// Update a relationship. Only fields explicitly present in the arguments
/// are forwarded; `id` itself never is.
pub async fn update(client: Arc<RemoteClient>, args: Value) -> ToolResult {
    let id = require_str(&args, "id")?;

    let mut body = match args {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    body.remove("id");

    let resp = client
        .send(
            Method::PUT,
            &format!("/relationships/{id}"),
            &[],
            Some(&Value::Object(body)),
        )
        .await
        .map_err(transport_failure)?;

    match resp.status {
        StatusCode::OK => Ok(format!(
            "Relationship updated successfully:\n{}",
            pretty_body(&resp.body)?
        )),
        StatusCode::NOT_FOUND => Err(format!("Relationship not found: {id}")),
        _ => Err(http_failure(&resp)),
    }
}

/// Delete a relationship. The server answers 200 or 204 depending on version.
pub async fn delete(client: Arc<RemoteClient>, args: Value) -> ToolResult {
    let id = require_str(&args, "id")?;

    let resp = client
        .send(Method::DELETE, &format!("/relationships/{id}"), &[], None)
        .await
        .map_err(transport_failure)?;

    match resp.status {
        StatusCode::OK | StatusCode::NO_CONTENT => {
            Ok(format!("Relationship {id} deleted successfully"))
        }
        StatusCode::NOT_FOUND => Err(format!("Relationship not found: {id}")),
        _ => Err(http_failure(&resp)),
    }
}

/// List every relationship attached to an entity.
pub async fn list_for_entity(client: Arc<RemoteClient>, args: Value) -> ToolResult {
    let entity_id = require_str(&args, "entity_id")?;

    let resp = client
        .send(
            Method::GET,
            &format!("/entities/{entity_id}/relationships"),
            &[],
            None,
        )
        .await
        .map_err(transport_failure)?;

    if resp.status != StatusCode::OK {
        return Err(http_failure(&resp));
    }

    let relationships: Vec<Value> = serde_json::from_str(&resp.body)
        .map_err(|e| format!("Invalid response body: {e}"))?;
    let listing = serde_json::to_string_pretty(&relationships).map_err(|e| e.to_string())?;
    Ok(format!(
        "Found {} relationships:\n{}",
        relationships.len(),
        listing
    ))
}

#[cfg(test)]
mod tests {
    use httpmock::{
        Method::{DELETE, GET, POST, PUT},
        MockServer,
    };
    use serde_json::json;
    use url::Url;

    use super::*;
    use crate::config::Config;

    fn client_for(server: &MockServer) -> Arc<RemoteClient> {
        let config = Config {
            api_key: "k".to_string(),
            api_url: Url::parse(&server.base_url()).unwrap(),
            debug: false,
        };
        Arc::new(RemoteClient::from_config(&config).unwrap())
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/relationships").json_body(json!({
                    "source_id": "a",
                    "target_id": "b",
                    "relationship_type": "depends_on",
                    "bidirectional": false,
                    "properties": {}
                }));
                then.status(201).json_body(json!({ "id": "r-1" }));
            })
            .await;

        let text = create(
            client_for(&server),
            json!({ "source_id": "a", "target_id": "b", "relationship_type": "depends_on" }),
        )
        .await
        .unwrap();

        mock.assert_async().await;
        assert!(text.starts_with("Relationship created successfully:"));
    }

    #[tokio::test]
    async fn test_create_missing_predicate_fails_before_http() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/relationships");
                then.status(201).json_body(json!({}));
            })
            .await;

        let err = create(
            client_for(&server),
            json!({ "source_id": "a", "target_id": "b" }),
        )
        .await
        .unwrap_err();

        assert!(err.contains("relationship_type"));
        assert_eq!(mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn test_get_404_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/relationships/r-9");
                then.status(404).body("{}");
            })
            .await;

        let err = get(client_for(&server), json!({ "id": "r-9" }))
            .await
            .unwrap_err();
        assert_eq!(err, "Relationship not found: r-9");
    }

    #[tokio::test]
    async fn test_update_forwards_only_present_fields() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/relationships/r-1")
                    .json_body(json!({ "bidirectional": true }));
                then.status(200).json_body(json!({ "id": "r-1" }));
            })
            .await;

        let text = update(
            client_for(&server),
            json!({ "id": "r-1", "bidirectional": true }),
        )
        .await
        .unwrap();

        mock.assert_async().await;
        assert!(text.starts_with("Relationship updated successfully:"));
    }

    #[tokio::test]
    async fn test_delete_200() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/relationships/r-1");
                then.status(200).json_body(json!({}));
            })
            .await;

        let text = delete(client_for(&server), json!({ "id": "r-1" }))
            .await
            .unwrap();
        assert_eq!(text, "Relationship r-1 deleted successfully");
    }

    #[tokio::test]
    async fn test_list_for_entity() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/entities/e-1/relationships");
                then.status(200)
                    .json_body(json!([{ "id": "r-1" }, { "id": "r-2" }]));
            })
            .await;

        let text = list_for_entity(client_for(&server), json!({ "entity_id": "e-1" }))
            .await
            .unwrap();
        assert!(text.starts_with("Found 2 relationships:"));
    }

    #[tokio::test]
    async fn test_list_for_entity_requires_entity_id() {
        let server = MockServer::start_async().await;
        let err = list_for_entity(client_for(&server), json!({}))
            .await
            .unwrap_err();
        assert_eq!(err, "entity_id is required");
    }
}
