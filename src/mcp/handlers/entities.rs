//! Entity tool handlers
//!
//! CRUD plus listing against `/entities`. Every handler maps to exactly one
//! HTTP call; 404 on id-addressed operations is reported as a distinct
//! not-found failure rather than a generic HTTP failure.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde_json::{Map, Value};

use super::{http_failure, parse_args, pretty_body, require_str, transport_failure, ToolResult};
use crate::mcp::tools::{CreateEntityTool, ListEntitiesTool};
use crate::remote::RemoteClient;

/// Create an entity. 201 is a full success; 206 means the server applied
/// the entity but not everything attached to it (e.g. a parent link), and
/// is passed through as a success with a caveat note.
pub async fn create(client: Arc<RemoteClient>, args: Value) -> ToolResult {
    let tool_args: CreateEntityTool = parse_args(&args)?;
    let body = serde_json::to_value(&tool_args).map_err(|e| e.to_string())?;

    let resp = client
        .send(Method::POST, "/entities", &[], Some(&body))
        .await
        .map_err(transport_failure)?;

    match resp.status {
        StatusCode::CREATED => Ok(format!(
            "Entity created successfully:\n{}",
            pretty_body(&resp.body)?
        )),
        StatusCode::PARTIAL_CONTENT => Ok(format!(
            "Entity created successfully:\n{}\n\nNote: the server reported partial success (HTTP 206); part of the request may not have been applied.",
            pretty_body(&resp.body)?
        )),
        _ => Err(http_failure(&resp)),
    }
}

/// Retrieve an entity by id.
pub async fn get(client: Arc<RemoteClient>, args: Value) -> ToolResult {
    let id = require_str(&args, "id")?;

    let resp = client
        .send(Method::GET, &format!("/entities/{id}"), &[], None)
        .await
        .map_err(transport_failure)?;

    match resp.status {
        StatusCode::OK => pretty_body(&resp.body),
        StatusCode::NOT_FOUND => Err(format!("Entity not found: {id}")),
        _ => Err(http_failure(&resp)),
    }
}

/// Update an entity. All fields except `id` itself are forwarded verbatim.
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
            &format!("/entities/{id}"),
            &[],
            Some(&Value::Object(body)),
        )
        .await
        .map_err(transport_failure)?;

    match resp.status {
        StatusCode::OK => Ok(format!(
            "Entity updated successfully:\n{}",
            pretty_body(&resp.body)?
        )),
        StatusCode::NOT_FOUND => Err(format!("Entity not found: {id}")),
        _ => Err(http_failure(&resp)),
    }
}

/// Delete an entity. The server answers 200 or 204 depending on version.
pub async fn delete(client: Arc<RemoteClient>, args: Value) -> ToolResult {
    let id = require_str(&args, "id")?;

    let resp = client
        .send(Method::DELETE, &format!("/entities/{id}"), &[], None)
        .await
        .map_err(transport_failure)?;

    match resp.status {
        StatusCode::OK | StatusCode::NO_CONTENT => {
            Ok(format!("Entity {id} deleted successfully"))
        }
        StatusCode::NOT_FOUND => Err(format!("Entity not found: {id}")),
        _ => Err(http_failure(&resp)),
    }
}

/// List entities with pagination and optional tag filtering.
pub async fn list(client: Arc<RemoteClient>, args: Value) -> ToolResult {
    let tool_args: ListEntitiesTool = parse_args(&args)?;

    let mut query: Vec<(&str, String)> = vec![
        ("limit", tool_args.limit.to_string()),
        ("offset", tool_args.offset.to_string()),
    ];
    if !tool_args.tags.is_empty() {
        query.push(("tags", tool_args.tags.join(",")));
    }

    let resp = client
        .send(Method::GET, "/entities", &query, None)
        .await
        .map_err(transport_failure)?;

    if resp.status != StatusCode::OK {
        return Err(http_failure(&resp));
    }

    let entities: Vec<Value> = serde_json::from_str(&resp.body)
        .map_err(|e| format!("Invalid response body: {e}"))?;
    let listing = serde_json::to_string_pretty(&entities).map_err(|e| e.to_string())?;
    Ok(format!("Found {} entities:\n{}", entities.len(), listing))
}
