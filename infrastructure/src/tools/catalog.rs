//! Standalone tool catalog files (`--tools <file>`)
//!
//! A catalog uses the same `[[tools]]` tables as the config file, without
//! any of the other sections.

use crate::config::FileToolConfig;
use intentai_domain::{DomainError, ToolDefinition};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a tool catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read tool catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse tool catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid tool '{tool}' in catalog: {source}")]
    InvalidTool {
        tool: String,
        #[source]
        source: DomainError,
    },
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tools: Vec<FileToolConfig>,
}

/// Tool definitions loaded from a catalog file
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: Vec<ToolDefinition>,
}

impl ToolCatalog {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|e| match e {
            CatalogError::Parse { source, .. } => CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content).map_err(|source| CatalogError::Parse {
            path: PathBuf::new(),
            source,
        })?;

        let tools = file
            .tools
            .iter()
            .map(|tool| {
                tool.to_definition().map_err(|source| CatalogError::InvalidTool {
                    tool: tool.name.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { tools })
    }

    pub fn into_tools(self) -> Vec<ToolDefinition> {
        self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intentai_domain::ParameterType;

    const CATALOG: &str = r#"
[[tools]]
name = "create_user"
docstring = """
Create a new user account.

Triggers: create user, add user
Examples: create user John Doe
"""

[[tools.parameters]]
name = "name"

[[tools]]
name = "set_volume"
triggers = ["set volume to"]

[[tools.parameters]]
name = "level"
type = "integer"
"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = ToolCatalog::parse(CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);

        let tools = catalog.into_tools();
        let create = &tools[0];
        assert_eq!(create.description, "Create a new user account.");
        assert_eq!(create.trigger_phrases, vec!["create user", "add user"]);

        let volume = &tools[1];
        assert_eq!(volume.parameters[0].param_type, ParameterType::Number);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tools.toml");
        std::fs::write(&path, CATALOG).unwrap();

        let catalog = ToolCatalog::load(&path).unwrap();
        let names: Vec<String> = catalog.into_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["create_user", "set_volume"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ToolCatalog::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_parse_error_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[[tools]\nname = ").unwrap();

        match ToolCatalog::load(&path).unwrap_err() {
            CatalogError::Parse { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_tool() {
        let err = ToolCatalog::parse(
            r#"
[[tools]]
name = "bad"

[[tools.parameters]]
name = "x"
type = "date"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidTool { tool, .. } if tool == "bad"));
    }

    #[test]
    fn test_empty_catalog() {
        assert!(ToolCatalog::parse("").unwrap().is_empty());
    }
}
