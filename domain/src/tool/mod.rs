//! Tool domain module
//!
//! This module defines the static description of the tools an utterance can
//! be routed to. Tools are plain data: built once at registration time and
//! handed to the detector by reference.
//!
//! ```text
//! ┌──────────────────┐    ┌──────────────────┐
//! │ ToolSpec         │───▶│ ToolDefinition   │
//! │ (ordered)        │    │  ├─ parameters   │
//! └──────────────────┘    │  ├─ triggers     │
//!                         │  └─ examples     │
//!                         └──────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`ToolSpec`] — Ordered registry of available tools
//! - [`ToolDefinition`] — Schema for a single tool (name, params, triggers, examples)
//! - [`ToolParameter`](entities::ToolParameter) — One declared parameter with its
//!   [`ParameterType`](entities::ParameterType) tag and optional default
//! - [`ToolValidator`] — Pure domain trait annotating detected parameters
//!
//! Registration conveniences (docstring parsing, TOML catalogs) live in the
//! infrastructure layer; nothing here performs reflection or global lookup.

pub mod entities;
pub mod traits;

pub use entities::{ParameterType, ToolDefinition, ToolParameter, ToolSpec};
pub use traits::{DefaultToolValidator, ToolValidator, ValidationReport};
