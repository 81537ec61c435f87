//! MCP server: stdio transport and JSON-RPC method router
//!
//! Reads one JSON object per line from stdin and writes one JSON object per
//! line to stdout. Each request is handled in its own task so a slow remote
//! call never blocks the read loop; responses are therefore written in
//! completion order, not arrival order. Each response line is written
//! atomically under the stdout lock.

use std::sync::Arc;

use anyhow::Result;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::catalog;
use super::handlers::ToolDispatcher;
use super::jsonrpc::{
    JsonRpcRequest, JsonRpcResponse, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST,
    METHOD_NOT_FOUND, PARSE_ERROR,
};
use crate::config::Config;
use crate::remote::RemoteClient;

/// MCP protocol revision implemented by the bridge.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// Run the MCP server over stdio until stdin reaches EOF.
pub async fn run_mcp_server(config: &Config) -> Result<()> {
    let client = RemoteClient::from_config(config)?;
    let dispatcher = Arc::new(ToolDispatcher::new(client));

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();
    let stdout = Arc::new(Mutex::new(tokio::io::stdout()));
    let mut inflight = tokio::task::JoinSet::new();

    debug!("MCP server ready ({})", config.api_url);

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let dispatcher = Arc::clone(&dispatcher);
        let stdout = Arc::clone(&stdout);
        inflight.spawn(async move {
            if let Some(response) = handle_line(&dispatcher, &line).await {
                if let Err(e) = write_response(&stdout, &response).await {
                    warn!("Failed to write response: {e}");
                }
            }
        });
    }

    // Stdin closed: let already-accepted requests finish writing before
    // exiting. Signal-driven teardown bypasses this and abandons them.
    while inflight.join_next().await.is_some() {}

    debug!("stdin closed, MCP server stopping");
    Ok(())
}

/// Serialize a response envelope and write it as one output line.
async fn write_response(stdout: &Mutex<Stdout>, response: &JsonRpcResponse) -> Result<()> {
    let json = serde_json::to_string(response)?;
    debug!("Sending: {json}");

    let mut out = stdout.lock().await;
    out.write_all(json.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await?;
    Ok(())
}

/// Decode one input line and produce the response envelope for it, or
/// `None` when the line is a notification.
async fn handle_line(dispatcher: &ToolDispatcher, line: &str) -> Option<JsonRpcResponse> {
    let request: JsonRpcRequest = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            debug!("Parse error: {e}");
            return Some(JsonRpcResponse::error(
                Value::Null,
                PARSE_ERROR,
                format!("Parse error: {e}"),
            ));
        }
    };

    debug!("Received request: {}", request.method);

    // Notifications (no id) never get responses.
    if request.is_notification() {
        match request.method.as_str() {
            "notifications/initialized" => debug!("Client initialized"),
            "notifications/cancelled" => debug!("Client cancelled a request"),
            other => debug!("Ignoring notification: {other}"),
        }
        return None;
    }

    let id = request.response_id();

    if request.jsonrpc != "2.0" {
        return Some(JsonRpcResponse::error(
            id,
            INVALID_REQUEST,
            "Invalid JSON-RPC version".to_string(),
        ));
    }

    Some(match handle_request(dispatcher, &request).await {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err((code, message)) => JsonRpcResponse::error(id, code, message),
    })
}

/// Dispatch on the protocol method.
async fn handle_request(
    dispatcher: &ToolDispatcher,
    request: &JsonRpcRequest,
) -> Result<Value, (i64, String)> {
    match request.method.as_str() {
        "initialize" => Ok(handle_initialize()),
        "tools/list" => Ok(handle_list_tools()),
        "tools/call" => handle_call_tool(dispatcher, &request.params).await,
        "ping" => Ok(json!({})),
        other => Err((METHOD_NOT_FOUND, format!("Method not found: {other}"))),
    }
}

fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {
                "listChanged": true
            },
            "resources": {
                "subscribe": false,
                "listChanged": false
            }
        },
        "serverInfo": {
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

fn handle_list_tools() -> Value {
    json!({ "tools": catalog::tools() })
}

/// Invoke a tool. A failed operation still yields a protocol-level success
/// envelope whose payload carries `isError: true`; only a missing tool name
/// or an internal serialization failure becomes a protocol error.
async fn handle_call_tool(
    dispatcher: &ToolDispatcher,
    params: &Value,
) -> Result<Value, (i64, String)> {
    let name = params
        .get("name")
        .and_then(Value::as_str)
        .ok_or((INVALID_PARAMS, "Tool name is required".to_string()))?;

    let arguments = match params.get("arguments") {
        None | Some(Value::Null) => json!({}),
        Some(args) => args.clone(),
    };

    let result = dispatcher.call(name, arguments).await;
    serde_json::to_value(&result).map_err(|e| (INTERNAL_ERROR, e.to_string()))
}
