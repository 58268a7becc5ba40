//! Detection configuration from TOML (`[detection]` section)

use intentai_application::DetectionParams;
use intentai_domain::DEFAULT_MIN_CONFIDENCE;
use serde::{Deserialize, Serialize};

/// Raw detection configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDetectionConfig {
    /// Minimum confidence for a detection to be reported
    pub min_confidence: f64,
    /// Minimum similarity for "did you mean" suggestions
    pub fuzzy_threshold: f64,
    /// Number of ranked candidates to show
    pub max_candidates: usize,
    /// Register the built-in demo tools
    pub builtin_tools: bool,
}

impl Default for FileDetectionConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            fuzzy_threshold: 0.8,
            max_candidates: 3,
            builtin_tools: true,
        }
    }
}

impl FileDetectionConfig {
    /// Convert to per-call detection parameters
    pub fn to_params(&self) -> DetectionParams {
        DetectionParams::default()
            .with_min_confidence(self.min_confidence)
            .with_fuzzy_threshold(self.fuzzy_threshold)
            .with_max_candidates(self.max_candidates)
    }
}
