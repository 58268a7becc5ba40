//! Domain layer for intentai
//!
//! This crate contains the tool schema entities and the intent detection
//! engine. It has no dependencies on infrastructure or presentation
//! concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Tools
//!
//! A [`ToolDefinition`] is an immutable description of a named operation:
//! ordered parameters, trigger phrases, and example utterances. Tools are
//! collected into a [`ToolSpec`] at registration time.
//!
//! ## Detection
//!
//! [`IntentDetector`] routes an utterance to the best-fitting tool:
//!
//! - **Trigger matching**: a tool is a candidate only if one of its phrases
//!   occurs in the input; the longest phrase wins
//! - **Extraction**: parameter values are read from the text after the phrase
//! - **Scoring**: a fixed additive heuristic in `[0, 1]`
//! - **Ranking**: the strictly best candidate above a threshold

pub mod config;
pub mod core;
pub mod detection;
pub mod tool;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use detection::{
    Candidate, DEFAULT_MIN_CONFIDENCE, DetectionResult, IntentDetector, ScoreBreakdown,
    TriggerSuggestion, detect_tool_and_params,
};
pub use tool::{
    entities::{ParameterType, ToolDefinition, ToolParameter, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator, ValidationReport},
};
