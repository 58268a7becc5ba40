//! Tool sources and schema export
//!
//! - `builtin`: demo tools available without configuration
//! - `catalog`: `[[tools]]` tables loaded from a standalone file
//! - `docstring`: trigger and example directives embedded in descriptions
//! - `registry`: merges all sources into one ordered `ToolSpec`
//! - `schema`: JSON Schema export

pub mod builtin;
pub mod catalog;
pub mod docstring;
pub mod schema;

mod registry;

pub use builtin::default_tool_spec;
pub use catalog::{CatalogError, ToolCatalog};
pub use docstring::ToolDocstring;
pub use registry::{RegistryStats, ToolRegistry};
pub use schema::JsonSchemaToolConverter;
