//! Remote server client module
//!
//! Provides the HTTP client for the NexMemory REST API.

mod client;
mod types;

pub use client::RemoteClient;
pub use types::RawResponse;
