//! Tool domain traits
//!
//! Contains pure domain logic traits for validating detected parameters.

use super::entities::ToolDefinition;
use serde_json::Value;
use std::collections::BTreeMap;

/// Outcome of validating extracted parameters against a tool definition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Required parameters with no value, in declaration order
    pub missing_parameters: Vec<String>,
    /// Diagnostics for values of an unsupported kind
    pub validation_errors: Vec<String>,
}

/// Validator for detected parameters
///
/// This is a pure domain trait that annotates extracted values against
/// their definitions without any I/O operations. It never rejects a
/// detection; it only reports.
pub trait ToolValidator {
    /// Validate extracted parameters against a tool definition
    fn validate(
        &self,
        parameters: &BTreeMap<String, Value>,
        definition: &ToolDefinition,
    ) -> ValidationReport;
}

/// Default implementation of ToolValidator
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(
        &self,
        parameters: &BTreeMap<String, Value>,
        definition: &ToolDefinition,
    ) -> ValidationReport {
        let mut report = ValidationReport::default();

        for param in &definition.parameters {
            match parameters.get(&param.name) {
                None if param.required => report.missing_parameters.push(param.name.clone()),
                None => {}
                Some(value) if !is_supported_kind(value) => {
                    report.validation_errors.push(format!(
                        "Parameter '{}' for tool '{}' has unsupported value kind: {}",
                        param.name, definition.name, value
                    ));
                }
                Some(_) => {}
            }
        }

        report
    }
}

/// Values must be a string, number, boolean, object, or array.
fn is_supported_kind(value: &Value) -> bool {
    !value.is_null()
}
