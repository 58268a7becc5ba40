//! Intent detection engine
//!
//! Routes a free-form utterance to one registered tool and extracts its
//! parameters, using trigger phrases and fixed heuristics only.
//!
//! ```text
//! input ─▶ TriggerMatcher ─▶ ParameterExtractor ─▶ ConfidenceScorer ─▶ CandidateRanker ─▶ result
//!          (candidates +      (per candidate)       (per candidate)     (best ≥ threshold)
//!           longest phrase)
//! ```
//!
//! No tool matching → no extraction, no scoring, no result. Blank input and
//! empty tool lists short-circuit the same way. Nothing here performs I/O or
//! keeps state between calls.
//!
//! # Example
//!
//! ```
//! use intentai_domain::detection::detect_tool_and_params;
//! use intentai_domain::tool::{ToolDefinition, ToolParameter};
//!
//! let tools = vec![
//!     ToolDefinition::new("calculator", "Evaluate an expression")
//!         .with_parameter(ToolParameter::new("expression", "Expression", true))
//!         .with_trigger("calculate"),
//! ];
//!
//! let result = detect_tool_and_params("Calculate 5 * 13", &tools, 0.6).unwrap();
//! assert_eq!(result.tool, "calculator");
//! assert_eq!(result.get_string("expression"), Some("5 * 13"));
//! ```

pub mod detector;
pub mod extractor;
pub mod matcher;
pub mod ranker;
pub mod result;
pub mod scorer;

pub use detector::{IntentDetector, detect_tool_and_params};
pub use extractor::ParameterExtractor;
pub use matcher::{FuzzyMatch, TriggerMatch, TriggerMatcher};
pub use ranker::{CandidateRanker, DEFAULT_MIN_CONFIDENCE};
pub use result::{Candidate, DetectionResult, TriggerSuggestion};
pub use scorer::{ConfidenceScorer, ScoreBreakdown};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::{ParameterType, ToolDefinition, ToolParameter};
    use crate::tool::traits::{ToolValidator, ValidationReport};
    use serde_json::{Value, json};
    use std::collections::BTreeMap;

    fn calculator() -> ToolDefinition {
        ToolDefinition::new("calculator", "Evaluate an expression")
            .with_parameter(ToolParameter::new("expression", "Expression", true))
            .with_trigger("calculate")
    }

    fn get_weather() -> ToolDefinition {
        ToolDefinition::new("get_weather", "Weather for a city")
            .with_parameter(ToolParameter::new("city", "City", true))
            .with_parameter(ToolParameter::new("units", "Units", false).with_default("celsius"))
            .with_triggers(["weather in", "temperature in"])
    }

    fn lookup_stock() -> ToolDefinition {
        ToolDefinition::new("lookup_stock", "Stock quote")
            .with_parameter(ToolParameter::new("symbol", "Ticker", true))
            .with_parameter(
                ToolParameter::new("include_volume", "Volume", false)
                    .with_type(ParameterType::Boolean)
                    .with_default(false),
            )
            .with_triggers(["stock price of", "quote for"])
            .with_example("Stock price of MSFT")
    }

    fn toolbox() -> Vec<ToolDefinition> {
        vec![calculator(), get_weather(), lookup_stock()]
    }

    #[test]
    fn test_calculator_expression_from_remainder() {
        let result = detect_tool_and_params("Calculate 5 * 13", &toolbox(), 0.6).unwrap();
        assert_eq!(result.tool, "calculator");
        assert_eq!(result.parameters.len(), 1);
        assert_eq!(result.get_string("expression"), Some("5 * 13"));
        assert!(result.confidence >= 0.6);
        assert!(result.is_complete());
    }

    #[test]
    fn test_missing_required_is_penalized() {
        let tools = toolbox();
        assert!(detect_tool_and_params("Calculate", &tools, 0.6).is_none());

        let result = detect_tool_and_params("Calculate", &tools, 0.2).unwrap();
        assert_eq!(result.tool, "calculator");
        assert!(result.parameters.is_empty());
        assert_eq!(result.missing_parameters, vec!["expression"]);
        // (0.4 trigger + 0.2 exact) * 0.5
        assert!((result.confidence - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_weather_city_and_default_units() {
        let result = detect_tool_and_params("Weather in London", &toolbox(), 0.6).unwrap();
        assert_eq!(result.tool, "get_weather");
        let expected: BTreeMap<String, Value> = [
            ("city".to_string(), json!("London")),
            ("units".to_string(), json!("celsius")),
        ]
        .into_iter()
        .collect();
        assert_eq!(result.parameters, expected);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_no_trigger_overlap_detects_nothing() {
        assert!(detect_tool_and_params("Tell me a joke", &toolbox(), 0.6).is_none());
        assert!(detect_tool_and_params("Tell me a joke", &toolbox(), 0.0).is_none());
    }

    #[test]
    fn test_higher_score_wins() {
        let generic = ToolDefinition::new("weather_report", "").with_trigger("weather");
        let tools = vec![generic, get_weather()];
        let result = detect_tool_and_params("weather in Paris", &tools, 0.3).unwrap();
        assert_eq!(result.tool, "get_weather");
    }

    #[test]
    fn test_tie_keeps_first_supplied() {
        let tools = vec![
            ToolDefinition::new("first", "").with_trigger("ping"),
            ToolDefinition::new("second", "").with_trigger("ping"),
        ];
        let result = detect_tool_and_params("ping", &tools, 0.6).unwrap();
        assert_eq!(result.tool, "first");

        let reversed: Vec<ToolDefinition> = tools.into_iter().rev().collect();
        let result = detect_tool_and_params("ping", &reversed, 0.6).unwrap();
        assert_eq!(result.tool, "second");
    }

    #[test]
    fn test_longest_trigger_wins() {
        let tools = vec![
            ToolDefinition::new("forecast", "")
                .with_parameter(ToolParameter::new("city", "", true))
                .with_triggers(["weather", "weather forecast"]),
        ];
        let ranked = IntentDetector::new().rank_candidates("weather forecast for Paris", &tools);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].matched_phrase, "weather forecast");
        // remainder " for Paris": no "in", so the whole remainder is the city
        assert_eq!(ranked[0].parameters.get("city"), Some(&json!("for Paris")));
    }

    #[test]
    fn test_blank_input_and_empty_tools_short_circuit() {
        let detector = IntentDetector::new().with_min_confidence(0.0);
        assert!(detector.detect("", &toolbox()).is_none());
        assert!(detector.detect("   \t", &toolbox()).is_none());
        assert!(detector.detect("Calculate 5", &[]).is_none());
        assert!(detector.rank_candidates("", &toolbox()).is_empty());
    }

    #[test]
    fn test_confidence_within_unit_interval() {
        let inputs = [
            "Calculate 5 * 13",
            "calculate",
            "Weather in London",
            "temperature in New York in fahrenheit",
            "stock price of msft",
            "Stock price of MSFT",
            "quote for AAPL with volume calculate 2 weather in Rome",
        ];
        let detector = IntentDetector::new();
        for input in inputs {
            for candidate in detector.rank_candidates(input, &toolbox()) {
                assert!(
                    (0.0..=1.0).contains(&candidate.confidence),
                    "{input}: {}",
                    candidate.confidence
                );
            }
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let tools = toolbox();
        let detector = IntentDetector::new();
        let first = detector.detect("Stock price of MSFT with volume", &tools);
        let second = detector.detect("Stock price of MSFT with volume", &tools);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_raising_threshold_never_creates_detection() {
        let tools = toolbox();
        let inputs = ["Calculate", "Calculate 5 * 13", "weather in", "quote for"];
        for input in inputs {
            let mut seen_none = false;
            for step in 0..=10 {
                let threshold = step as f64 / 10.0;
                let detected = detect_tool_and_params(input, &tools, threshold).is_some();
                if seen_none {
                    assert!(!detected, "{input} re-detected at {threshold}");
                }
                seen_none |= !detected;
            }
        }
    }

    #[test]
    fn test_example_overlap_boosts_confidence() {
        let detector = IntentDetector::new();
        let ranked = detector.rank_candidates("Stock price of MSFT", &toolbox());
        assert_eq!(ranked[0].tool, "lookup_stock");
        assert_eq!(ranked[0].breakdown.example, scorer::EXAMPLE_BONUS);
        assert_eq!(ranked[0].parameters.get("symbol"), Some(&json!("MSFT")));
        assert_eq!(ranked[0].parameters.get("include_volume"), Some(&json!(false)));
    }

    #[test]
    fn test_custom_validator_annotations_do_not_change_confidence() {
        struct Strict;
        impl ToolValidator for Strict {
            fn validate(
                &self,
                _parameters: &BTreeMap<String, Value>,
                _definition: &ToolDefinition,
            ) -> ValidationReport {
                ValidationReport {
                    missing_parameters: vec![],
                    validation_errors: vec!["always".to_string()],
                }
            }
        }

        let plain = IntentDetector::new().detect("Calculate 2 + 2", &toolbox()).unwrap();
        let strict = IntentDetector::new()
            .with_validator(Strict)
            .detect("Calculate 2 + 2", &toolbox())
            .unwrap();
        assert_eq!(strict.validation_errors, vec!["always"]);
        assert_eq!(strict.confidence, plain.confidence);
    }

    #[test]
    fn test_suggestions_for_near_misses() {
        let detector = IntentDetector::new();
        let tools = toolbox();
        assert!(detector.detect("wether in London", &tools).is_none());

        let suggestions = detector.suggest("wether in London", &tools, 0.8);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].tool, "get_weather");
        assert_eq!(suggestions[0].phrase, "weather in");
    }

    #[test]
    fn test_uppercase_final_sigma_keeps_parameters() {
        let tools = vec![
            ToolDefinition::new("route", "")
                .with_parameter(ToolParameter::new("target", "", true))
                .with_trigger("οδος"),
        ];
        let upper = detect_tool_and_params("ΟΔΟΣ Athens", &tools, 0.6).unwrap();
        let lower = detect_tool_and_params("οδος Athens", &tools, 0.6).unwrap();
        assert_eq!(upper.get_string("target"), Some("Athens"));
        assert_eq!(upper.parameters, lower.parameters);
        assert_eq!(upper.confidence, lower.confidence);
    }

    #[test]
    fn test_concurrent_detection_shares_tools() {
        let tools = toolbox();
        let detector = IntentDetector::new();
        let expected = detector.detect("Weather in Oslo", &tools);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| detector.detect("Weather in Oslo", &tools)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
