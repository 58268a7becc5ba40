//! Tool domain entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::str::FromStr;

/// Type tag of a tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    /// Free text (default)
    #[default]
    String,
    /// Integer or floating point value
    Number,
    /// true / false flag
    Boolean,
    /// Structured value; never extracted from text
    Object,
}

impl ParameterType {
    pub fn as_str(&self) -> &str {
        match self {
            ParameterType::String => "string",
            ParameterType::Number => "number",
            ParameterType::Boolean => "boolean",
            ParameterType::Object => "object",
        }
    }
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ParameterType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "string" | "str" | "text" => Ok(ParameterType::String),
            "number" | "integer" | "int" | "float" => Ok(ParameterType::Number),
            "boolean" | "bool" => Ok(ParameterType::Boolean),
            "object" | "dict" | "array" => Ok(ParameterType::Object),
            _ => Err(DomainError::UnknownParameterType(s.to_string())),
        }
    }
}

/// Definition of a tool that utterances can be routed to
///
/// Built once at registration and read-only during detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "get_weather")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Parameter specifications, in declaration order
    pub parameters: Vec<ToolParameter>,
    /// Literal phrases that gate detection of this tool
    #[serde(default)]
    pub trigger_phrases: Vec<String>,
    /// Sample utterances that boost confidence when they overlap the input
    #[serde(default)]
    pub examples: Vec<String>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    #[serde(default)]
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type tag
    #[serde(rename = "type", default)]
    pub param_type: ParameterType,
    /// Value used when extraction finds nothing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
            trigger_phrases: Vec::new(),
            examples: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn with_trigger(mut self, phrase: impl Into<String>) -> Self {
        self.trigger_phrases.push(phrase.into());
        self
    }

    pub fn with_triggers(mut self, phrases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.trigger_phrases.extend(phrases.into_iter().map(Into::into));
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn with_examples(mut self, examples: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.examples.extend(examples.into_iter().map(Into::into));
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&ToolParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn required_parameters(&self) -> impl Iterator<Item = &ToolParameter> {
        self.parameters.iter().filter(|p| p.required)
    }

    /// Check that parameter names are unique within this tool
    pub fn check_parameters(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for param in &self.parameters {
            if !seen.insert(param.name.as_str()) {
                return Err(DomainError::DuplicateParameter {
                    tool: self.name.clone(),
                    parameter: param.name.clone(),
                });
            }
        }
        Ok(())
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: ParameterType::String,
            default: None,
        }
    }

    /// A required string parameter with no description
    pub fn required(name: impl Into<String>) -> Self {
        Self::new(name, "", true)
    }

    /// An optional string parameter with no description
    pub fn optional(name: impl Into<String>) -> Self {
        Self::new(name, "", false)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_type(mut self, param_type: ParameterType) -> Self {
        self.param_type = param_type;
        self
    }

    /// Attach a default value. A parameter with a default is never required.
    pub fn with_default(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.default = Some(value.into());
        self.required = false;
        self
    }
}

/// Ordered registry of tools handed to the detector
///
/// Iteration order is registration order, which is also the tie-break
/// order for equally scored candidates.
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: Vec<ToolDefinition>,
    index: HashMap<String, usize>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a tool (builder pattern).
    ///
    /// A tool whose name is already registered replaces the earlier
    /// definition in its original position.
    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.insert(tool);
        self
    }

    /// Register a tool, rejecting duplicate names
    pub fn try_register(mut self, tool: ToolDefinition) -> Result<Self, DomainError> {
        if self.index.contains_key(&tool.name) {
            return Err(DomainError::DuplicateTool(tool.name));
        }
        self.insert(tool);
        Ok(self)
    }

    /// Insert or replace in place. Returns `true` if a tool was replaced.
    pub fn insert(&mut self, tool: ToolDefinition) -> bool {
        match self.index.get(&tool.name) {
            Some(&pos) => {
                self.tools[pos] = tool;
                true
            }
            None => {
                self.index.insert(tool.name.clone(), self.tools.len());
                self.tools.push(tool);
                false
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.index.get(name).map(|&pos| &self.tools[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All tools in registration order
    pub fn all(&self) -> &[ToolDefinition] {
        &self.tools
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl FromIterator<ToolDefinition> for ToolSpec {
    fn from_iter<I: IntoIterator<Item = ToolDefinition>>(iter: I) -> Self {
        let mut spec = ToolSpec::new();
        for tool in iter {
            spec.insert(tool);
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parameter_type_from_str() {
        assert_eq!("string".parse::<ParameterType>().unwrap(), ParameterType::String);
        assert_eq!("INT".parse::<ParameterType>().unwrap(), ParameterType::Number);
        assert_eq!("float".parse::<ParameterType>().unwrap(), ParameterType::Number);
        assert_eq!("bool".parse::<ParameterType>().unwrap(), ParameterType::Boolean);
        assert_eq!("dict".parse::<ParameterType>().unwrap(), ParameterType::Object);
        assert_eq!(
            "date".parse::<ParameterType>(),
            Err(DomainError::UnknownParameterType("date".to_string()))
        );
    }

    #[test]
    fn test_parameter_type_serializes_lowercase() {
        let json = serde_json::to_string(&ParameterType::Boolean).unwrap();
        assert_eq!(json, "\"boolean\"");
    }

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new("get_weather", "Get weather for a city")
            .with_parameter(ToolParameter::new("city", "City name", true))
            .with_parameter(ToolParameter::new("units", "Units", true).with_default("celsius"))
            .with_triggers(["weather in", "temperature in"])
            .with_example("Weather in London");

        assert_eq!(tool.name, "get_weather");
        assert_eq!(tool.parameters.len(), 2);
        assert_eq!(tool.trigger_phrases, vec!["weather in", "temperature in"]);
        assert_eq!(tool.required_parameters().count(), 1);

        let units = tool.parameter("units").unwrap();
        assert!(!units.required);
        assert_eq!(units.default, Some(json!("celsius")));
    }

    #[test]
    fn test_parameter_shorthands() {
        let symbol = ToolParameter::required("symbol").with_description("Ticker");
        assert!(symbol.required);
        assert_eq!(symbol.description, "Ticker");

        let flag = ToolParameter::optional("include_history").with_type(ParameterType::Boolean);
        assert!(!flag.required);
        assert_eq!(flag.param_type, ParameterType::Boolean);
        assert!(flag.default.is_none());
    }

    #[test]
    fn test_check_parameters_rejects_duplicates() {
        let tool = ToolDefinition::new("t", "")
            .with_parameter(ToolParameter::new("a", "", true))
            .with_parameter(ToolParameter::new("a", "", false));
        assert_eq!(
            tool.check_parameters(),
            Err(DomainError::DuplicateParameter {
                tool: "t".to_string(),
                parameter: "a".to_string(),
            })
        );
    }

    #[test]
    fn test_tool_spec_preserves_registration_order() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("zeta", ""))
            .register(ToolDefinition::new("alpha", ""))
            .register(ToolDefinition::new("mid", ""));

        let names: Vec<&str> = spec.names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(spec.len(), 3);
        assert!(spec.get("alpha").is_some());
        assert!(spec.get("unknown").is_none());
    }

    #[test]
    fn test_tool_spec_register_replaces_in_place() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("a", "first"))
            .register(ToolDefinition::new("b", ""))
            .register(ToolDefinition::new("a", "second"));

        let names: Vec<&str> = spec.names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(spec.get("a").unwrap().description, "second");
    }

    #[test]
    fn test_tool_spec_try_register_rejects_duplicates() {
        let spec = ToolSpec::new()
            .try_register(ToolDefinition::new("a", ""))
            .unwrap();
        let err = spec.try_register(ToolDefinition::new("a", "")).unwrap_err();
        assert_eq!(err, DomainError::DuplicateTool("a".to_string()));
    }

    #[test]
    fn test_tool_definition_deserialize_defaults() {
        let tool: ToolDefinition = serde_json::from_value(json!({
            "name": "search_web",
            "description": "Search",
            "parameters": [{"name": "query", "required": true}]
        }))
        .unwrap();
        assert!(tool.trigger_phrases.is_empty());
        assert_eq!(tool.parameters[0].param_type, ParameterType::String);
    }
}
