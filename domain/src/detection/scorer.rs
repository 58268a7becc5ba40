//! Confidence scoring.
//!
//! The score is a fixed additive heuristic followed by one multiplicative
//! penalty and a clamp:
//!
//! 1. `+0.4` when any trigger phrase occurs in the input (first one found)
//! 2. `+0.2` when that phrase is the entire input
//! 3. `+0.4 * extracted / required` when the tool has required parameters
//!    (not capped, may exceed 0.4)
//! 4. `+0.2` when the input and any example contain one another
//! 5. `x0.5` when a required parameter is still unset
//! 6. clamp to `[0, 1]`

use crate::tool::entities::ToolDefinition;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub const TRIGGER_WEIGHT: f64 = 0.4;
pub const EXACT_MATCH_BONUS: f64 = 0.2;
pub const PARAMETER_WEIGHT: f64 = 0.4;
pub const EXAMPLE_BONUS: f64 = 0.2;
pub const MISSING_REQUIRED_FACTOR: f64 = 0.5;

/// Per-term contributions to a confidence score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreBreakdown {
    pub trigger: f64,
    pub exact_match: f64,
    pub parameters: f64,
    pub example: f64,
    /// Whether the missing-required penalty was applied
    pub penalized: bool,
    /// Final clamped score
    pub total: f64,
}

/// Scores a (tool, extracted parameters) pair against the input
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfidenceScorer;

impl ConfidenceScorer {
    pub fn score(
        &self,
        normalized: &str,
        tool: &ToolDefinition,
        parameters: &BTreeMap<String, Value>,
    ) -> f64 {
        self.breakdown(normalized, tool, parameters).total
    }

    pub fn breakdown(
        &self,
        normalized: &str,
        tool: &ToolDefinition,
        parameters: &BTreeMap<String, Value>,
    ) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown::default();
        let input = normalized.trim();

        let first_phrase = tool
            .trigger_phrases
            .iter()
            .map(|p| p.trim().to_lowercase())
            .find(|p| !p.is_empty() && input.contains(p.as_str()));
        if let Some(phrase) = first_phrase {
            breakdown.trigger = TRIGGER_WEIGHT;
            if phrase == input {
                breakdown.exact_match = EXACT_MATCH_BONUS;
            }
        }

        let required = tool.required_parameters().count();
        if required > 0 {
            breakdown.parameters = PARAMETER_WEIGHT * (parameters.len() as f64 / required as f64);
        }

        // Blank examples never count as an overlap
        let overlaps_example = tool.examples.iter().any(|example| {
            let example = example.trim().to_lowercase();
            !example.is_empty() && (input.contains(&example) || example.contains(input))
        });
        if overlaps_example {
            breakdown.example = EXAMPLE_BONUS;
        }

        let mut score =
            breakdown.trigger + breakdown.exact_match + breakdown.parameters + breakdown.example;

        breakdown.penalized = tool
            .required_parameters()
            .any(|p| !parameters.contains_key(&p.name));
        if breakdown.penalized {
            score *= MISSING_REQUIRED_FACTOR;
        }

        breakdown.total = score.clamp(0.0, 1.0);
        breakdown
    }
}
