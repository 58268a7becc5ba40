//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod detection;
mod output;
mod tools;

pub use detection::FileDetectionConfig;
pub use output::FileOutputConfig;
pub use tools::{FileToolConfig, FileToolParameter};

use intentai_domain::config::validation::check_unit_interval;
use intentai_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Detection thresholds
    pub detection: FileDetectionConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// User-declared tools, in detection order
    pub tools: Vec<FileToolConfig>,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. Thresholds within `[0, 1]`
    /// 2. Empty and duplicate tool names (duplicates are a warning; the
    ///    later definition wins)
    /// 3. Parameter type tags and duplicate parameter names
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Thresholds
        issues.extend(check_unit_interval(
            "detection.min_confidence",
            self.detection.min_confidence,
        ));
        issues.extend(check_unit_interval(
            "detection.fuzzy_threshold",
            self.detection.fuzzy_threshold,
        ));

        // 2. Tool names
        let mut names = HashSet::new();
        for tool in &self.tools {
            if tool.name.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyToolName,
                    "tools: a tool has an empty name",
                ));
                continue;
            }
            if !names.insert(tool.name.as_str()) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::DuplicateToolName {
                        name: tool.name.clone(),
                    },
                    format!(
                        "tools: '{}' is declared more than once, the last definition wins",
                        tool.name
                    ),
                ));
            }

            // 3. Parameters
            let mut params = HashSet::new();
            for param in &tool.parameters {
                if param.parse_type().is_err() {
                    issues.push(ConfigIssue::error(
                        ConfigIssueCode::UnknownParameterType {
                            tool: tool.name.clone(),
                            parameter: param.name.clone(),
                            value: param.param_type.clone(),
                        },
                        format!(
                            "tools.{}.{}: unknown type '{}' (expected string, number, boolean or object)",
                            tool.name, param.name, param.param_type
                        ),
                    ));
                }
                if !params.insert(param.name.as_str()) {
                    issues.push(ConfigIssue::error(
                        ConfigIssueCode::DuplicateParameterName {
                            tool: tool.name.clone(),
                            parameter: param.name.clone(),
                        },
                        format!(
                            "tools.{}: parameter '{}' is declared more than once",
                            tool.name, param.name
                        ),
                    ));
                }
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intentai_domain::{OutputFormat, Severity};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[detection]
min_confidence = 0.4
max_candidates = 5

[output]
format = "json"
color = false

[[tools]]
name = "create_user"
triggers = ["create user"]
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.detection.min_confidence, 0.4);
        assert_eq!(config.detection.max_candidates, 5);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(config.tools.len(), 1);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.detection.min_confidence, 0.6);
        assert!(config.detection.builtin_tools);
        assert!(config.output.format.is_none());
        assert!(config.output.color);
        assert!(config.tools.is_empty());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_threshold_out_of_range() {
        let mut config = FileConfig::default();
        config.detection.min_confidence = 1.5;
        config.detection.fuzzy_threshold = -0.1;

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(ConfigIssue::is_error));
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::ThresholdOutOfRange { field, .. } if field == "detection.min_confidence"
        ));
    }

    #[test]
    fn test_validate_tool_issues() {
        let toml_str = r#"
[[tools]]
name = "greet"

[[tools.parameters]]
name = "who"
type = "person"

[[tools.parameters]]
name = "who"

[[tools]]
name = "greet"

[[tools]]
name = ""
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();

        let codes: Vec<&ConfigIssueCode> = issues.iter().map(|i| &i.code).collect();
        assert!(codes.iter().any(|c| matches!(
            c,
            ConfigIssueCode::UnknownParameterType { value, .. } if value == "person"
        )));
        assert!(codes.iter().any(|c| matches!(
            c,
            ConfigIssueCode::DuplicateParameterName { parameter, .. } if parameter == "who"
        )));
        assert!(codes.iter().any(|c| matches!(c, ConfigIssueCode::EmptyToolName)));

        let duplicate = issues
            .iter()
            .find(|i| matches!(i.code, ConfigIssueCode::DuplicateToolName { .. }))
            .unwrap();
        assert_eq!(duplicate.severity, Severity::Warning);
    }
}
