//! nexmem - MCP stdio bridge for the NexMemory knowledge base
//!
//! Bridges the stdio-based MCP protocol to REST API calls: JSON-RPC
//! requests come in one per line on stdin, each tool call maps to one HTTP
//! request against the NexMemory server, and responses go out one per line
//! on stdout.
//!
//! # Architecture
//!
//! - [`config`] - environment configuration, read once at startup
//! - [`remote`] - HTTP client for the NexMemory REST API
//! - [`mcp`] - transport codec, method router, tool catalog and handlers

pub mod config;
pub mod mcp;
pub mod remote;

pub use config::Config;
pub use mcp::run_mcp_server;
pub use remote::RemoteClient;
