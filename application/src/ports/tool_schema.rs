//! Tool schema conversion port.
//!
//! Separates "which tools exist" (domain) from "how to publish them"
//! (infrastructure). The domain layer defines [`ToolDefinition`] and
//! [`ToolSpec`]; this port handles the JSON Schema document that external
//! callers consume.

use intentai_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Port for converting tool definitions to a JSON Schema document.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to an object schema.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Build the full document, keyed by tool name.
    fn schema_document(&self, spec: &ToolSpec) -> serde_json::Value;
}
