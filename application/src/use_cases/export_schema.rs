//! Export Schema use case
//!
//! Publishes the registered tool set as a JSON Schema document through a
//! [`ToolSchemaPort`] adapter.

use crate::ports::tool_schema::ToolSchemaPort;
use intentai_domain::ToolSpec;
use std::sync::Arc;
use tracing::debug;

/// Use case for exporting tool definitions as JSON Schema
pub struct ExportSchemaUseCase {
    converter: Arc<dyn ToolSchemaPort>,
}

impl ExportSchemaUseCase {
    pub fn new(converter: Arc<dyn ToolSchemaPort>) -> Self {
        Self { converter }
    }

    pub fn execute(&self, spec: &ToolSpec) -> serde_json::Value {
        debug!("Exporting schema for {} tools", spec.len());
        self.converter.schema_document(spec)
    }
}
