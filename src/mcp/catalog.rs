//! Operation catalog
//!
//! The static list of tools advertised via `tools/list`. Defined once at
//! startup, immutable, never persisted. The input schemas are advisory
//! (clients use them to shape arguments); the bridge itself only enforces
//! the required arguments each HTTP call needs.

use std::sync::OnceLock;

use serde_json::{json, Value};

static CATALOG: OnceLock<Vec<Value>> = OnceLock::new();

/// Ordered list of tool descriptors.
pub fn tools() -> &'static [Value] {
    CATALOG.get_or_init(build_catalog).as_slice()
}

fn build_catalog() -> Vec<Value> {
    vec![
        json!({
            "name": "create_entity",
            "description": "Create a new entity in the knowledge base with name, description, tags, and optional properties",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "The name of the entity" },
                    "description": { "type": "string", "description": "A detailed description of the entity" },
                    "tags": { "type": "array", "items": { "type": "string" }, "description": "Array of tag names to categorize the entity" },
                    "properties": { "type": "object", "description": "Optional custom properties as key-value pairs" },
                    "parent_id": { "type": "string", "description": "Optional ID of a parent entity to link the new entity to" },
                    "relationship_type": { "type": "string", "description": "Relationship type for the optional parent link" }
                },
                "required": ["name", "tags"]
            }
        }),
        json!({
            "name": "get_entity",
            "description": "Retrieve an entity by its ID",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "The UUID of the entity to retrieve" }
                },
                "required": ["id"]
            }
        }),
        json!({
            "name": "update_entity",
            "description": "Update an existing entity's name, description, tags, or properties",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "The UUID of the entity to update" },
                    "name": { "type": "string", "description": "The updated name of the entity" },
                    "description": { "type": "string", "description": "The updated description of the entity" },
                    "tags": { "type": "array", "items": { "type": "string" }, "description": "Updated array of tag names" },
                    "properties": { "type": "object", "description": "Updated custom properties" }
                },
                "required": ["id"]
            }
        }),
        json!({
            "name": "delete_entity",
            "description": "Delete an entity from the knowledge base",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "The UUID of the entity to delete" }
                },
                "required": ["id"]
            }
        }),
        json!({
            "name": "list_entities",
            "description": "List entities with optional filtering by tags, pagination support",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "limit": { "type": "integer", "description": "Maximum number of entities to return (default: 50)", "default": 50 },
                    "offset": { "type": "integer", "description": "Number of entities to skip (default: 0)", "default": 0 },
                    "tags": { "type": "array", "items": { "type": "string" }, "description": "Filter entities by tags (all tags must match)" }
                }
            }
        }),
        json!({
            "name": "search_entities",
            "description": "Perform semantic search on the knowledge base using natural language query",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "query": { "type": "string", "description": "Natural language search query" },
                    "limit": { "type": "integer", "description": "Maximum number of results to return (default: 10)", "default": 10 }
                },
                "required": ["query"]
            }
        }),
        json!({
            "name": "create_relationship",
            "description": "Create a relationship between two entities in the knowledge base",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "source_id": { "type": "string", "description": "The UUID of the source entity" },
                    "target_id": { "type": "string", "description": "The UUID of the target entity" },
                    "relationship_type": { "type": "string", "description": "The type of relationship (e.g. 'depends_on', 'part_of')" },
                    "bidirectional": { "type": "boolean", "description": "Whether the relationship applies in both directions (default: false)", "default": false },
                    "properties": { "type": "object", "description": "Optional custom properties as key-value pairs" }
                },
                "required": ["source_id", "target_id", "relationship_type"]
            }
        }),
        json!({
            "name": "get_relationship",
            "description": "Retrieve a relationship by its ID",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "The UUID of the relationship to retrieve" }
                },
                "required": ["id"]
            }
        }),
        json!({
            "name": "update_relationship",
            "description": "Update an existing relationship's type, direction, or properties",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "The UUID of the relationship to update" },
                    "relationship_type": { "type": "string", "description": "The updated relationship type" },
                    "bidirectional": { "type": "boolean", "description": "Updated direction flag" },
                    "properties": { "type": "object", "description": "Updated custom properties" }
                },
                "required": ["id"]
            }
        }),
        json!({
            "name": "delete_relationship",
            "description": "Delete a relationship from the knowledge base",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "The UUID of the relationship to delete" }
                },
                "required": ["id"]
            }
        }),
        json!({
            "name": "get_entity_relationships",
            "description": "List all relationships of an entity",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "entity_id": { "type": "string", "description": "The UUID of the entity whose relationships to list" }
                },
                "required": ["entity_id"]
            }
        }),
    ]
}
