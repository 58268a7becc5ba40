//! Tool definitions from TOML (`[[tools]]` array)
//!
//! Tools are declared as an array of tables; declaration order is the
//! detection iteration order.
//!
//! ```toml
//! [[tools]]
//! name = "create_user"
//! description = "Create a new user account"
//! triggers = ["create user", "add user"]
//! examples = ["create user John Doe"]
//!
//! [[tools.parameters]]
//! name = "name"
//! required = true
//!
//! [[tools.parameters]]
//! name = "admin"
//! type = "boolean"
//! default = false
//! ```
//!
//! Instead of `triggers`/`examples`, a tool may carry a `docstring` with
//! `Trigger phrases:` and `Examples:` lines (see [`ToolDocstring`]).

use crate::tools::docstring::ToolDocstring;
use intentai_domain::{DomainError, ParameterType, ToolDefinition, ToolParameter};
use serde::{Deserialize, Serialize};

/// One `[[tools]]` entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolConfig {
    pub name: String,
    pub description: Option<String>,
    /// Free-text description that may embed triggers and examples
    pub docstring: Option<String>,
    pub triggers: Vec<String>,
    pub examples: Vec<String>,
    pub parameters: Vec<FileToolParameter>,
}

/// One `[[tools.parameters]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileToolParameter {
    pub name: String,
    /// Type tag: "string" (default), "number", "boolean", "object" or an alias
    #[serde(rename = "type", default = "default_param_type")]
    pub param_type: String,
    #[serde(default)]
    pub description: String,
    /// Defaults to `true` unless a default value is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

fn default_param_type() -> String {
    "string".to_string()
}

impl FileToolParameter {
    pub fn parse_type(&self) -> Result<ParameterType, DomainError> {
        self.param_type.parse()
    }

    pub fn to_parameter(&self) -> Result<ToolParameter, DomainError> {
        let required = self.required.unwrap_or(self.default.is_none());
        let mut param = ToolParameter::new(&self.name, &self.description, required)
            .with_type(self.parse_type()?);
        if let Some(default) = &self.default {
            param = param.with_default(default.clone());
        }
        Ok(param)
    }
}

impl FileToolConfig {
    /// Build the domain definition.
    ///
    /// Each of description, triggers and examples comes from the explicit
    /// field when set, else from the docstring. The name is the last
    /// fallback for both description and trigger (underscores as spaces).
    pub fn to_definition(&self) -> Result<ToolDefinition, DomainError> {
        let doc = self
            .docstring
            .as_deref()
            .map(ToolDocstring::parse)
            .unwrap_or_default();

        let description = self
            .description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .or(doc.summary)
            .unwrap_or_else(|| self.name.clone());

        let triggers = if self.triggers.is_empty() {
            doc.triggers
        } else {
            self.triggers.clone()
        };
        let examples = if self.examples.is_empty() {
            doc.examples
        } else {
            self.examples.clone()
        };

        let mut tool = ToolDefinition::new(&self.name, description)
            .with_triggers(triggers)
            .with_examples(examples);

        if tool.trigger_phrases.is_empty() {
            tool = tool.with_trigger(self.name.replace('_', " "));
        }

        for param in &self.parameters {
            tool = tool.with_parameter(param.to_parameter()?);
        }
        tool.check_parameters()?;

        Ok(tool)
    }
}
