//! Per-call detection parameters.
//!
//! [`DetectionParams`] groups the caller-supplied settings for
//! [`DetectIntentUseCase`](crate::use_cases::detect_intent::DetectIntentUseCase).
//! The scoring weights themselves are fixed domain policy and not configurable.

use intentai_domain::{DEFAULT_MIN_CONFIDENCE, DomainError};
use serde::{Deserialize, Serialize};

/// Detection tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionParams {
    /// Minimum confidence for a detection to be reported.
    pub min_confidence: f64,
    /// Minimum similarity for a "did you mean" suggestion.
    pub fuzzy_threshold: f64,
    /// How many ranked candidates to report alongside the result.
    pub max_candidates: usize,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            fuzzy_threshold: 0.8,
            max_candidates: 3,
        }
    }
}

impl DetectionParams {
    // ==================== Builder Methods ====================

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn with_fuzzy_threshold(mut self, ratio: f64) -> Self {
        self.fuzzy_threshold = ratio;
        self
    }

    pub fn with_max_candidates(mut self, max: usize) -> Self {
        self.max_candidates = max;
        self
    }

    /// Both thresholds must lie within `[0, 1]`.
    pub fn validate(&self) -> Result<(), DomainError> {
        for value in [self.min_confidence, self.fuzzy_threshold] {
            if !(0.0..=1.0).contains(&value) {
                return Err(DomainError::InvalidThreshold(value));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = DetectionParams::default();
        assert_eq!(params.min_confidence, 0.6);
        assert_eq!(params.fuzzy_threshold, 0.8);
        assert_eq!(params.max_candidates, 3);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let params = DetectionParams::default()
            .with_min_confidence(0.2)
            .with_fuzzy_threshold(0.5)
            .with_max_candidates(10);
        assert_eq!(params.min_confidence, 0.2);
        assert_eq!(params.fuzzy_threshold, 0.5);
        assert_eq!(params.max_candidates, 10);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let params = DetectionParams::default().with_min_confidence(1.5);
        assert_eq!(params.validate(), Err(DomainError::InvalidThreshold(1.5)));

        let params = DetectionParams::default().with_fuzzy_threshold(-0.1);
        assert!(params.validate().is_err());
    }
}
