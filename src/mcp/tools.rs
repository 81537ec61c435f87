//! MCP Tool argument structs
//!
//! Simple structs for deserializing tool arguments. The serializable ones
//! double as the HTTP request body for their call, so optional fields are
//! forwarded only when present and declared defaults are applied.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Create a new entity in the knowledge base
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateEntityTool {
    /// Entity name
    pub name: String,
    /// Tags categorizing the entity
    pub tags: Vec<String>,
    /// Optional long-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional custom properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    /// Optional parent entity to link the new entity to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Relationship type for the parent link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_type: Option<String>,
}

/// List entities with tag filtering and pagination
#[derive(Debug, Deserialize)]
pub struct ListEntitiesTool {
    /// Maximum number of entities to return (default: 50)
    #[serde(default = "default_list_limit")]
    pub limit: i64,
    /// Number of entities to skip (default: 0)
    #[serde(default)]
    pub offset: i64,
    /// Tags to filter by; joined with commas into one query value
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_list_limit() -> i64 {
    50
}

/// Create a relationship between two entities
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateRelationshipTool {
    /// Source entity ID
    pub source_id: String,
    /// Target entity ID
    pub target_id: String,
    /// Relationship type (e.g. 'depends_on')
    pub relationship_type: String,
    /// Whether the relationship applies in both directions
    #[serde(default)]
    pub bidirectional: bool,
    /// Custom properties, empty by default
    #[serde(default)]
    pub properties: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_list_defaults() {
        let args: ListEntitiesTool = serde_json::from_value(json!({})).unwrap();
        assert_eq!(args.limit, 50);
        assert_eq!(args.offset, 0);
        assert!(args.tags.is_empty());
    }

    #[test]
    fn test_create_entity_skips_absent_optionals() {
        let args: CreateEntityTool =
            serde_json::from_value(json!({ "name": "Widget", "tags": ["tool"] })).unwrap();
        let body = serde_json::to_value(&args).unwrap();
        assert_eq!(body, json!({ "name": "Widget", "tags": ["tool"] }));
    }

    #[test]
    fn test_create_entity_forwards_parent_link_when_present() {
        let args: CreateEntityTool = serde_json::from_value(json!({
            "name": "Widget",
            "tags": ["tool"],
            "parent_id": "p-1",
            "relationship_type": "part_of"
        }))
        .unwrap();
        let body = serde_json::to_value(&args).unwrap();
        assert_eq!(body["parent_id"], "p-1");
        assert_eq!(body["relationship_type"], "part_of");
    }

    #[test]
    fn test_create_entity_requires_tags() {
        let err =
            serde_json::from_value::<CreateEntityTool>(json!({ "name": "Widget" })).unwrap_err();
        assert!(err.to_string().contains("tags"));
    }

    #[test]
    fn test_create_relationship_defaults() {
        let args: CreateRelationshipTool = serde_json::from_value(json!({
            "source_id": "a",
            "target_id": "b",
            "relationship_type": "depends_on"
        }))
        .unwrap();
        assert!(!args.bidirectional);
        assert!(args.properties.is_empty());

        let body = serde_json::to_value(&args).unwrap();
        assert_eq!(body["bidirectional"], json!(false));
        assert_eq!(body["properties"], json!({}));
    }
}
