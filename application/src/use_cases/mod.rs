//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod detect_intent;
pub mod export_schema;
