//! Tool handler registry
//!
//! Maps tool names to handler function values sharing a uniform signature,
//! so adding an operation means adding a catalog entry and one registration
//! here rather than growing a match arm.

use std::{collections::HashMap, future::Future, pin::Pin, sync::Arc};

use serde_json::Value;

use super::handlers::{entities, relationships, search};
use crate::remote::RemoteClient;

/// Future returned by every tool handler.
pub type ToolFuture = Pin<Box<dyn Future<Output = Result<String, String>> + Send>>;

/// Uniform handler signature: argument map in, text or failure message out.
pub type ToolHandler = fn(Arc<RemoteClient>, Value) -> ToolFuture;

/// Registry mapping tool names to handler functions.
pub struct Registry {
    tools: HashMap<&'static str, ToolHandler>,
}

impl Registry {
    /// Build the registry with every catalogued tool registered.
    pub fn new() -> Self {
        let mut tools: HashMap<&'static str, ToolHandler> = HashMap::new();

        tools.insert("create_entity", |c, a| Box::pin(entities::create(c, a)));
        tools.insert("get_entity", |c, a| Box::pin(entities::get(c, a)));
        tools.insert("update_entity", |c, a| Box::pin(entities::update(c, a)));
        tools.insert("delete_entity", |c, a| Box::pin(entities::delete(c, a)));
        tools.insert("list_entities", |c, a| Box::pin(entities::list(c, a)));
        tools.insert("search_entities", |c, a| Box::pin(search::search(c, a)));
        tools.insert("create_relationship", |c, a| {
            Box::pin(relationships::create(c, a))
        });
        tools.insert("get_relationship", |c, a| {
            Box::pin(relationships::get(c, a))
        });
        tools.insert("update_relationship", |c, a| {
            Box::pin(relationships::update(c, a))
        });
        tools.insert("delete_relationship", |c, a| {
            Box::pin(relationships::delete(c, a))
        });
        tools.insert("get_entity_relationships", |c, a| {
            Box::pin(relationships::list_for_entity(c, a))
        });

        Self { tools }
    }

    /// Look up a handler by tool name.
    pub fn get(&self, name: &str) -> Option<ToolHandler> {
        self.tools.get(name).copied()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::catalog;

    #[test]
    fn test_registry_covers_every_catalogued_tool() {
        let registry = Registry::new();
        for tool in catalog::tools() {
            let name = tool["name"].as_str().unwrap();
            assert!(registry.get(name).is_some(), "no handler for {name}");
        }
        assert_eq!(registry.tools.len(), catalog::tools().len());
    }

    #[test]
    fn test_unknown_name_is_absent() {
        assert!(Registry::new().get("nonexistent_tool").is_none());
    }
}
