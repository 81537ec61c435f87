//! Remote API types
//!
//! The client deliberately does not deserialize response bodies; status
//! interpretation belongs to the tool handlers.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;

/// Raw outcome of a single HTTP call.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers, unparsed.
    pub headers: HeaderMap,
    /// Full response body as text.
    pub body: String,
}

impl RawResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
