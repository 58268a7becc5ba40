//! Detect Intent use case
//!
//! Routes one utterance against the registered tool set and gathers what a
//! caller needs to act on, or explain, the outcome: the detection, the
//! ranked runner-up candidates, and fuzzy suggestions when nothing matched.

use crate::config::DetectionParams;
use intentai_domain::{
    Candidate, DetectionResult, DomainError, IntentDetector, ToolSpec, TriggerSuggestion,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur before detection runs
#[derive(Error, Debug)]
pub enum DetectIntentError {
    #[error("Invalid detection parameters: {0}")]
    InvalidParams(#[from] DomainError),
}

/// Input for the DetectIntent use case
#[derive(Debug, Clone)]
pub struct DetectIntentInput {
    /// The user's utterance
    pub text: String,
    /// Threshold and reporting limits
    pub params: DetectionParams,
}

impl DetectIntentInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: DetectionParams::default(),
        }
    }

    pub fn with_params(mut self, params: DetectionParams) -> Self {
        self.params = params;
        self
    }
}

/// Output of the DetectIntent use case
#[derive(Debug, Clone, Serialize)]
pub struct DetectIntentOutput {
    /// The detection, or `None` when nothing cleared the threshold
    pub detection: Option<DetectionResult>,
    /// Scored candidates, best first, capped at `max_candidates`
    pub candidates: Vec<Candidate>,
    /// Near-miss trigger phrases; only filled when nothing was detected
    pub suggestions: Vec<TriggerSuggestion>,
}

impl DetectIntentOutput {
    pub fn is_detected(&self) -> bool {
        self.detection.is_some()
    }
}

/// Use case for detecting a tool and its parameters from free text
#[derive(Debug, Clone)]
pub struct DetectIntentUseCase {
    tools: Arc<ToolSpec>,
}

impl DetectIntentUseCase {
    pub fn new(tools: Arc<ToolSpec>) -> Self {
        Self { tools }
    }

    pub fn execute(&self, input: DetectIntentInput) -> Result<DetectIntentOutput, DetectIntentError> {
        let params = input.params;
        params.validate()?;

        let detector = IntentDetector::new().with_min_confidence(params.min_confidence);
        let tools = self.tools.all();

        info!(
            "Detecting intent against {} tools (min_confidence={})",
            tools.len(),
            params.min_confidence
        );

        let mut candidates = detector.rank_candidates(&input.text, tools);
        for candidate in &candidates {
            debug!(
                tool = %candidate.tool,
                phrase = %candidate.matched_phrase,
                confidence = candidate.confidence,
                penalized = candidate.breakdown.penalized,
                "Scored candidate"
            );
        }
        candidates.truncate(params.max_candidates);

        let detection = detector.detect(&input.text, tools);
        let suggestions = match &detection {
            Some(result) => {
                info!(
                    "Detected tool {} (confidence {:.3})",
                    result.tool, result.confidence
                );
                Vec::new()
            }
            None => {
                let suggestions = detector.suggest(&input.text, tools, params.fuzzy_threshold);
                info!("No tool detected ({} suggestions)", suggestions.len());
                suggestions
            }
        };

        Ok(DetectIntentOutput {
            detection,
            candidates,
            suggestions,
        })
    }
}
