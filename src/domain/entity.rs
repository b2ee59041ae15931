//! Exportable registry entities
//!
//! The registry hands back tool-group and server configurations whose full
//! shape belongs to the management service. mcpdump only ever looks at the
//! `name` field; everything else is carried through verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The two kinds of entity the registry exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityCategory {
    /// Named tool grouping
    ToolGroup,
    /// Upstream MCP server connection
    McpServer,
}

impl EntityCategory {
    /// All categories, in export order
    pub const ALL: [EntityCategory; 2] = [EntityCategory::ToolGroup, EntityCategory::McpServer];

    /// Subdirectory (under the export root) holding this category's files
    pub fn dir_name(&self) -> &'static str {
        match self {
            EntityCategory::ToolGroup => "groups",
            EntityCategory::McpServer => "servers",
        }
    }

    /// Human-readable label used in progress messages
    pub fn label(&self) -> &'static str {
        match self {
            EntityCategory::ToolGroup => "Tool Group",
            EntityCategory::McpServer => "MCP Server",
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An opaque entity configuration as returned by the registry
///
/// Keys are kept in sorted order, so serializing the same entity twice
/// always yields the same bytes.
///
/// # Examples
///
/// ```
/// use mcpdump::domain::ExportableEntity;
///
/// let entity = ExportableEntity::try_from(serde_json::json!({
///     "name": "prod-group",
///     "included_tools": ["fs__read_file"]
/// }))
/// .unwrap();
/// assert_eq!(entity.name(), "prod-group");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ExportableEntity {
    fields: Map<String, Value>,
}

impl ExportableEntity {
    /// Field holding the entity name
    pub const NAME_FIELD: &'static str = "name";

    /// Returns the entity name
    pub fn name(&self) -> &str {
        self.fields
            .get(Self::NAME_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

impl TryFrom<Map<String, Value>> for ExportableEntity {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        match fields.get(Self::NAME_FIELD) {
            Some(Value::String(name)) if !name.is_empty() => Ok(Self { fields }),
            Some(Value::String(_)) => Err("entity name cannot be empty".to_string()),
            Some(other) => Err(format!("entity name must be a string, got {other}")),
            None => Err("entity is missing the 'name' field".to_string()),
        }
    }
}

impl TryFrom<Value> for ExportableEntity {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Self::try_from(fields),
            other => Err(format!("entity must be a JSON object, got {other}")),
        }
    }
}

impl From<ExportableEntity> for Map<String, Value> {
    fn from(entity: ExportableEntity) -> Self {
        entity.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_dir_names() {
        assert_eq!(EntityCategory::ToolGroup.dir_name(), "groups");
        assert_eq!(EntityCategory::McpServer.dir_name(), "servers");
    }

    #[test]
    fn test_categories_export_in_fixed_order() {
        assert_eq!(
            EntityCategory::ALL,
            [EntityCategory::ToolGroup, EntityCategory::McpServer]
        );
    }

    #[test]
    fn test_entity_requires_name() {
        assert!(ExportableEntity::try_from(json!({"transport": "stdio"})).is_err());
        assert!(ExportableEntity::try_from(json!({"name": ""})).is_err());
        assert!(ExportableEntity::try_from(json!({"name": 7})).is_err());
        assert!(ExportableEntity::try_from(json!(["name"])).is_err());
    }

    #[test]
    fn test_entity_passes_fields_through() {
        let value = json!({
            "name": "github",
            "transport": "streamable_http",
            "url": "https://api.githubcopilot.com/mcp/",
            "bearer_token": null
        });
        let entity = ExportableEntity::try_from(value.clone()).unwrap();

        assert_eq!(entity.name(), "github");
        assert_eq!(serde_json::to_value(&entity).unwrap(), value);
    }

    #[test]
    fn test_entity_deserializes_from_registry_payload() {
        let entities: Vec<ExportableEntity> =
            serde_json::from_str(r#"[{"name":"a","x":1},{"name":"b"}]"#).unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[1].name(), "b");

        let bad = serde_json::from_str::<Vec<ExportableEntity>>(r#"[{"x":1}]"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_entity_keys_serialize_sorted() {
        let entity = ExportableEntity::try_from(json!({"z": 1, "name": "n", "a": 2})).unwrap();
        let text = serde_json::to_string(&entity).unwrap();
        assert_eq!(text, r#"{"a":2,"name":"n","z":1}"#);
    }
}
