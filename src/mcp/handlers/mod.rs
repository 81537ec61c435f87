//! MCP Tool handlers
//!
//! Each module handles a group of related tools. Handlers never fail past
//! their own boundary: missing arguments, non-success statuses, transport
//! failures and malformed bodies all come back as the failure arm of
//! [`ToolResult`], which the dispatcher folds into the uniform tool-call
//! payload with its `isError` flag.

pub mod entities;
pub mod relationships;
pub mod search;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::registry::Registry;
use crate::remote::{RawResponse, RemoteClient};

/// Result type for tool handlers
pub type ToolResult = Result<String, String>;

/// One block of tool output content.
#[derive(Debug, Serialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// Uniform tool invocation outcome. Success and failure share this shape;
/// callers inspect `isError`, not the envelope's `error` field.
#[derive(Debug, Serialize)]
pub struct ToolCallResult {
    pub content: Vec<ContentBlock>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolCallResult {
    fn from_outcome(outcome: ToolResult) -> Self {
        let (text, is_error) = match outcome {
            Ok(text) => (text, false),
            Err(message) => (message, true),
        };
        Self {
            content: vec![ContentBlock {
                kind: "text".to_string(),
                text,
            }],
            is_error,
        }
    }
}

/// Dispatches tool calls through the registry.
pub struct ToolDispatcher {
    registry: Registry,
    client: Arc<RemoteClient>,
}

impl ToolDispatcher {
    /// Create a dispatcher backed by the given remote client.
    pub fn new(client: RemoteClient) -> Self {
        Self {
            registry: Registry::new(),
            client: Arc::new(client),
        }
    }

    /// Invoke a tool by name with an argument map.
    pub async fn call(&self, name: &str, arguments: Value) -> ToolCallResult {
        let outcome = match self.registry.get(name) {
            Some(handler) => handler(Arc::clone(&self.client), arguments).await,
            None => Err(format!("Unknown tool: {name}")),
        };
        ToolCallResult::from_outcome(outcome)
    }
}

/// Extract a required non-empty string argument.
pub(crate) fn require_str(args: &Value, field: &str) -> Result<String, String> {
    match args.get(field).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(format!("{field} is required")),
    }
}

/// Deserialize the argument map into a typed tool struct.
pub(crate) fn parse_args<T: DeserializeOwned>(args: &Value) -> Result<T, String> {
    serde_json::from_value(args.clone()).map_err(|e| format!("Invalid params: {e}"))
}

/// Parse a response body as JSON and pretty-print it.
pub(crate) fn pretty_body(body: &str) -> Result<String, String> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| format!("Invalid response body: {e}"))?;
    serde_json::to_string_pretty(&value).map_err(|e| e.to_string())
}

/// Generic non-success outcome, carrying the status and raw body.
pub(crate) fn http_failure(resp: &RawResponse) -> String {
    format!("HTTP {}: {}", resp.status.as_u16(), resp.body)
}

/// Transport-level failure (connection refused, timeout, body read error).
pub(crate) fn transport_failure(err: anyhow::Error) -> String {
    format!("{err:#}")
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use url::Url;

    use super::*;
    use crate::config::Config;

    fn dispatcher() -> ToolDispatcher {
        let config = Config {
            api_key: String::new(),
            api_url: Url::parse("http://127.0.0.1:1/api").unwrap(),
            debug: false,
        };
        ToolDispatcher::new(RemoteClient::from_config(&config).unwrap())
    }

    #[tokio::test]
    async fn test_unknown_tool_is_an_error_result() {
        let result = dispatcher().call("bogus_tool", json!({})).await;
        assert!(result.is_error);
        assert!(result.content[0].text.contains("Unknown tool: bogus_tool"));
    }

    #[test]
    fn test_result_shape() {
        let ok = ToolCallResult::from_outcome(Ok("done".to_string()));
        let value = serde_json::to_value(&ok).unwrap();
        assert_eq!(
            value,
            json!({
                "content": [{ "type": "text", "text": "done" }],
                "isError": false
            })
        );

        let err = ToolCallResult::from_outcome(Err("boom".to_string()));
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["isError"], json!(true));
        assert_eq!(value["content"][0]["text"], "boom");
    }

    #[test]
    fn test_require_str() {
        assert_eq!(
            require_str(&json!({ "id": "abc" }), "id").unwrap(),
            "abc"
        );
        assert_eq!(
            require_str(&json!({}), "id").unwrap_err(),
            "id is required"
        );
        // Empty strings and non-strings are rejected too.
        assert!(require_str(&json!({ "id": "" }), "id").is_err());
        assert!(require_str(&json!({ "id": 7 }), "id").is_err());
    }
}
