//! Application layer for intentai
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DetectionParams;
pub use ports::tool_schema::ToolSchemaPort;
pub use use_cases::detect_intent::{
    DetectIntentError, DetectIntentInput, DetectIntentOutput, DetectIntentUseCase,
};
pub use use_cases::export_schema::ExportSchemaUseCase;
