//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] producing a draft-07
//! document with one object schema per tool under `definitions`.

use intentai_application::ports::tool_schema::ToolSchemaPort;
use intentai_domain::tool::entities::{ToolDefinition, ToolSpec};

/// JSON Schema dialect identifier placed at the document root
pub const SCHEMA_DIALECT: &str = "http://json-schema.org/draft-07/schema#";

/// Default implementation producing draft-07 JSON Schema.
///
/// Each property's `type` is the lowercase parameter type tag; `default`
/// and `description` are emitted when present. Required parameter names
/// populate `required`.
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let mut prop = serde_json::Map::new();
            prop.insert(
                "type".to_string(),
                serde_json::json!(param.param_type.as_str()),
            );
            if let Some(default) = &param.default {
                prop.insert("default".to_string(), default.clone());
            }
            if !param.description.is_empty() {
                prop.insert(
                    "description".to_string(),
                    serde_json::json!(param.description),
                );
            }
            properties.insert(param.name.clone(), serde_json::Value::Object(prop));

            if param.required {
                required.push(serde_json::json!(param.name));
            }
        }

        serde_json::json!({
            "type": "object",
            "description": tool.description,
            "properties": properties,
            "required": required,
            "additionalProperties": false,
        })
    }

    fn schema_document(&self, spec: &ToolSpec) -> serde_json::Value {
        let definitions: serde_json::Map<String, serde_json::Value> = spec
            .all()
            .iter()
            .map(|tool| (tool.name.clone(), self.tool_to_schema(tool)))
            .collect();

        serde_json::json!({
            "$schema": SCHEMA_DIALECT,
            "definitions": definitions,
        })
    }
}
