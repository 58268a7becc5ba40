//! Detection value objects

use super::scorer::ScoreBreakdown;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The routed tool and its extracted parameters
///
/// Either produced whole or not at all; "no detection" is `None` at the
/// call site, never a partially filled result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Name of the detected tool
    pub tool: String,
    /// Heuristic fit in `[0, 1]`
    pub confidence: f64,
    /// Extracted and defaulted parameter values
    pub parameters: BTreeMap<String, Value>,
    /// Required parameters that are still absent
    pub missing_parameters: Vec<String>,
    /// Diagnostics for values of an unsupported kind
    pub validation_errors: Vec<String>,
}

impl DetectionResult {
    /// True when nothing is missing and nothing failed validation
    pub fn is_complete(&self) -> bool {
        self.missing_parameters.is_empty() && self.validation_errors.is_empty()
    }

    /// Get a string parameter
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).and_then(|v| v.as_str())
    }

    /// Get an optional i64 parameter
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.parameters.get(key).and_then(|v| v.as_i64())
    }

    /// Get an optional f64 parameter
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.parameters.get(key).and_then(|v| v.as_f64())
    }

    /// Get an optional bool parameter
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.parameters.get(key).and_then(|v| v.as_bool())
    }
}

/// A scored candidate tool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    /// Position of the tool in the caller-supplied list
    #[serde(skip)]
    pub index: usize,
    pub tool: String,
    /// Trigger phrase that split the input for extraction
    pub matched_phrase: String,
    pub confidence: f64,
    pub parameters: BTreeMap<String, Value>,
    pub breakdown: ScoreBreakdown,
}

/// A near-miss trigger phrase for a tool that did not match exactly
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggerSuggestion {
    pub tool: String,
    pub phrase: String,
    pub ratio: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> DetectionResult {
        let mut parameters = BTreeMap::new();
        parameters.insert("city".to_string(), json!("London"));
        parameters.insert("days".to_string(), json!(3));
        parameters.insert("detailed".to_string(), json!(true));
        DetectionResult {
            tool: "get_weather".to_string(),
            confidence: 0.8,
            parameters,
            missing_parameters: vec![],
            validation_errors: vec![],
        }
    }

    #[test]
    fn test_accessors() {
        let result = sample();
        assert_eq!(result.get_string("city"), Some("London"));
        assert_eq!(result.get_i64("days"), Some(3));
        assert_eq!(result.get_f64("days"), Some(3.0));
        assert_eq!(result.get_bool("detailed"), Some(true));
        assert_eq!(result.get_string("missing"), None);
        assert!(result.is_complete());
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["tool"], "get_weather");
        assert_eq!(value["parameters"]["city"], "London");
        assert!(value["missing_parameters"].as_array().unwrap().is_empty());
        assert!(value["validation_errors"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_candidate_serialization_hides_index() {
        let candidate = Candidate {
            index: 4,
            tool: "calculator".to_string(),
            matched_phrase: "calculate".to_string(),
            confidence: 0.8,
            parameters: BTreeMap::new(),
            breakdown: ScoreBreakdown::default(),
        };
        let value = serde_json::to_value(&candidate).unwrap();
        assert!(value.get("index").is_none());
        assert_eq!(value["matched_phrase"], "calculate");
    }
}
