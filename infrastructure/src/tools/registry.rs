//! Tool Registry
//!
//! The [`ToolRegistry`] gathers tool definitions from every source the CLI
//! knows about and produces the ordered [`ToolSpec`] the detector runs on.
//!
//! # Usage
//!
//! ```
//! use intentai_infrastructure::tools::ToolRegistry;
//!
//! let spec = ToolRegistry::new().with_builtin_tools().build();
//! assert!(spec.contains("calculator"));
//! ```
//!
//! # Resolution
//!
//! Sources are registered in order: built-in tools, then `[[tools]]` from
//! the config file, then `--tools` catalogs. A later definition with an
//! existing name replaces the earlier one in its original position, so a
//! config file can override a built-in tool without reordering detection.

use crate::config::FileConfig;
use crate::tools::builtin::default_tool_spec;
use crate::tools::catalog::ToolCatalog;
use intentai_domain::{ConfigIssue, ToolDefinition, ToolSpec};

/// Tool registry that aggregates tool sources
#[derive(Debug, Default)]
pub struct ToolRegistry {
    spec: ToolSpec,
    /// Problems found while registering (invalid tools are skipped)
    issues: Vec<ConfigIssue>,
    replaced: usize,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the built-in demo tools
    pub fn with_builtin_tools(mut self) -> Self {
        for tool in default_tool_spec().all() {
            self.register_definition(tool.clone());
        }
        self
    }

    /// Register a single definition, replacing any tool with the same name
    pub fn register_definition(&mut self, tool: ToolDefinition) {
        let name = tool.name.clone();
        if self.spec.insert(tool) {
            self.replaced += 1;
            tracing::debug!(tool = %name, "Replaced previously registered tool");
        } else {
            tracing::debug!(tool = %name, "Registered tool");
        }
    }

    /// Register the tools declared in the config file.
    ///
    /// Built-in tools are added first when `detection.builtin_tools` is set.
    pub fn register_config(mut self, config: &FileConfig) -> Self {
        if config.detection.builtin_tools {
            self = self.with_builtin_tools();
        }

        for tool in &config.tools {
            match tool.to_definition() {
                Ok(definition) => self.register_definition(definition),
                Err(e) => {
                    tracing::warn!(tool = %tool.name, error = %e, "Skipping invalid tool");
                }
            }
        }
        self.issues.extend(config.validate());
        self
    }

    /// Register every tool from a catalog
    pub fn register_catalog(mut self, catalog: ToolCatalog) -> Self {
        for tool in catalog.into_tools() {
            self.register_definition(tool);
        }
        self
    }

    /// Issues collected from registered config files
    pub fn issues(&self) -> &[ConfigIssue] {
        &self.issues
    }

    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            total_tools: self.spec.len(),
            replaced: self.replaced,
        }
    }

    /// Finish registration
    pub fn build(self) -> ToolSpec {
        let stats = self.stats();
        tracing::info!(
            tools = stats.total_tools,
            replaced = stats.replaced,
            "Tool registry built"
        );
        self.spec
    }
}

/// Statistics about the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    pub total_tools: usize,
    /// Definitions that overrode an earlier tool of the same name
    pub replaced: usize,
}
