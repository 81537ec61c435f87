//! Semantic search handler

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

use super::{http_failure, require_str, transport_failure, ToolResult};
use crate::remote::RemoteClient;

/// Default result cap when the caller does not pass `limit`.
const DEFAULT_SEARCH_LIMIT: i64 = 10;

/// Run a natural-language search. The response body carries `count` and
/// `results`; the result text reports both.
pub async fn search(client: Arc<RemoteClient>, args: Value) -> ToolResult {
    let query = require_str(&args, "query")?;
    let limit = args
        .get("limit")
        .and_then(Value::as_i64)
        .unwrap_or(DEFAULT_SEARCH_LIMIT);

    let body = json!({ "query": query, "limit": limit });

    let resp = client
        .send(Method::POST, "/memory/search", &[], Some(&body))
        .await
        .map_err(transport_failure)?;

    if resp.status != StatusCode::OK {
        return Err(http_failure(&resp));
    }

    let value: Value = serde_json::from_str(&resp.body)
        .map_err(|e| format!("Invalid response body: {e}"))?;
    let count = value.get("count").cloned().unwrap_or(Value::Null);
    let results = value.get("results").cloned().unwrap_or(Value::Null);
    let listing = serde_json::to_string_pretty(&results).map_err(|e| e.to_string())?;

    Ok(format!("Found {count} results:\n{listing}"))
}

#[cfg(test)]
mod tests {
    use httpmock::{Method::POST, MockServer};
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
    async fn test_search_defaults_limit_and_reports_count() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/memory/search")
                    .json_body(json!({ "query": "rust bridges", "limit": 10 }));
                then.status(200).json_body(json!({
                    "count": 2,
                    "results": [{ "id": "e-1" }, { "id": "e-2" }]
                }));
            })
            .await;

        let text = search(client_for(&server), json!({ "query": "rust bridges" }))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(text.starts_with("Found 2 results:"));
        assert!(text.contains("e-2"));
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let server = MockServer::start_async().await;
        let err = search(client_for(&server), json!({ "limit": 5 }))
            .await
            .unwrap_err();
        assert_eq!(err, "query is required");
    }

    #[tokio::test]
    async fn test_search_http_failure_carries_status_and_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/memory/search");
                then.status(503).body("overloaded");
            })
            .await;

        let err = search(client_for(&server), json!({ "query": "x" }))
            .await
            .unwrap_err();
        assert_eq!(err, "HTTP 503: overloaded");
    }
}
