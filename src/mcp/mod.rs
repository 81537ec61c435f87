//! MCP (Model Context Protocol) bridge
//!
//! Exposes the NexMemory REST API as MCP tools over stdio JSON-RPC.
//!
//! # Tools
//! - `create_entity` / `get_entity` / `update_entity` / `delete_entity` - entity CRUD
//! - `list_entities` - paginated listing with tag filtering
//! - `search_entities` - semantic search
//! - `create_relationship` / `get_relationship` / `update_relationship` /
//!   `delete_relationship` - relationship CRUD
//! - `get_entity_relationships` - relationships of one entity

mod catalog;
mod handlers;
mod jsonrpc;
mod registry;
mod server;
mod tools;

pub use server::run_mcp_server;
