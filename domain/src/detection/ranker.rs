//! Candidate selection and result assembly.

use super::result::{Candidate, DetectionResult};
use crate::tool::entities::ToolDefinition;
use crate::tool::traits::ToolValidator;

/// Default minimum confidence for a detection
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.6;

/// Picks the winning candidate and assembles the result
#[derive(Debug, Clone, Copy)]
pub struct CandidateRanker {
    min_confidence: f64,
}

impl Default for CandidateRanker {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CONFIDENCE)
    }
}

impl CandidateRanker {
    pub fn new(min_confidence: f64) -> Self {
        Self { min_confidence }
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    /// Strictly best candidate in supply order, if it clears the threshold.
    ///
    /// Equal scores keep the candidate seen first.
    pub fn select<'c>(&self, candidates: &'c [Candidate]) -> Option<&'c Candidate> {
        let mut best: Option<&Candidate> = None;
        for candidate in candidates {
            if best.is_none_or(|b| candidate.confidence > b.confidence) {
                best = Some(candidate);
            }
        }
        best.filter(|b| b.confidence >= self.min_confidence)
    }

    /// All candidates by descending confidence; ties keep supply order.
    pub fn rank(&self, mut candidates: Vec<Candidate>) -> Vec<Candidate> {
        candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        candidates
    }

    /// Build the result for the winner, annotating missing and invalid
    /// parameters. Annotation never changes the confidence.
    pub fn build_result(
        &self,
        winner: &Candidate,
        tool: &ToolDefinition,
        validator: &impl ToolValidator,
    ) -> DetectionResult {
        let report = validator.validate(&winner.parameters, tool);
        DetectionResult {
            tool: winner.tool.clone(),
            confidence: winner.confidence,
            parameters: winner.parameters.clone(),
            missing_parameters: report.missing_parameters,
            validation_errors: report.validation_errors,
        }
    }
}
