//! Remote server HTTP client
//!
//! Async client for the NexMemory REST API. Issues exactly one request per
//! call; retries and response interpretation are out of scope here.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Method};
use serde_json::Value;
use url::Url;

use super::types::RawResponse;
use crate::config::Config;

/// Fixed per-request timeout. A call that exceeds it is aborted and
/// reported as a transport failure.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the remote NexMemory server
#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl RemoteClient {
    /// Create a new client from the bridge config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Build a URL for an endpoint, preserving the base URL's path prefix
    /// (a base of `http://host:3000/api` maps `/entities` to
    /// `http://host:3000/api/entities`).
    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}{}", url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url.set_query(None);
        url
    }

    /// Attach the fixed credential headers.
    fn auth_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("X-API-Key", &self.api_key)
    }

    /// Issue one HTTP request and capture the raw outcome.
    ///
    /// Resolves with status, body text and headers once the body is read.
    /// Rejects on socket-level failure or timeout. The body is returned
    /// unparsed.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<RawResponse> {
        let mut url = self.endpoint(path);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        let mut builder = self.auth_headers(self.client.request(method.clone(), url));
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let resp = builder
            .send()
            .await
            .with_context(|| format!("{} {} failed", method, path))?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .text()
            .await
            .with_context(|| format!("{} {}: failed to read response body", method, path))?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
