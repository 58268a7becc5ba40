//! Infrastructure layer for intentai
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, configuration file loading, and the
//! tool sources (built-in tools, config tables, catalog files).

pub mod config;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileDetectionConfig, FileOutputConfig, FileToolConfig,
    FileToolParameter,
};
pub use tools::{
    CatalogError, JsonSchemaToolConverter, ToolCatalog, ToolDocstring, ToolRegistry,
    default_tool_spec,
};
