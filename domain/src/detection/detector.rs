//! The detection pipeline.

use super::extractor::ParameterExtractor;
use super::matcher::TriggerMatcher;
use super::ranker::CandidateRanker;
use super::result::{Candidate, DetectionResult, TriggerSuggestion};
use super::scorer::ConfidenceScorer;
use crate::core::string::normalize;
use crate::tool::entities::ToolDefinition;
use crate::tool::traits::{DefaultToolValidator, ToolValidator};

/// Routes an utterance to one of the supplied tools.
///
/// Stateless: every call reads the tool slice and the input and allocates a
/// fresh result, so one detector can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct IntentDetector<V = DefaultToolValidator> {
    matcher: TriggerMatcher,
    extractor: ParameterExtractor,
    scorer: ConfidenceScorer,
    ranker: CandidateRanker,
    validator: V,
}

impl IntentDetector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V: ToolValidator> IntentDetector<V> {
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.ranker = CandidateRanker::new(min_confidence);
        self
    }

    pub fn with_validator<W: ToolValidator>(self, validator: W) -> IntentDetector<W> {
        IntentDetector {
            matcher: self.matcher,
            extractor: self.extractor,
            scorer: self.scorer,
            ranker: self.ranker,
            validator,
        }
    }

    pub fn min_confidence(&self) -> f64 {
        self.ranker.min_confidence()
    }

    /// Detect the best tool for `input`, or `None` when nothing clears the
    /// confidence threshold.
    pub fn detect(&self, input: &str, tools: &[ToolDefinition]) -> Option<DetectionResult> {
        let candidates = self.score_candidates(input, tools);
        let winner = self.ranker.select(&candidates)?;
        Some(
            self.ranker
                .build_result(winner, &tools[winner.index], &self.validator),
        )
    }

    /// Every candidate, best first, regardless of the threshold
    pub fn rank_candidates(&self, input: &str, tools: &[ToolDefinition]) -> Vec<Candidate> {
        self.ranker.rank(self.score_candidates(input, tools))
    }

    /// Near-miss trigger phrases for tools that did not match exactly.
    ///
    /// Sorted by similarity, best first.
    pub fn suggest(
        &self,
        input: &str,
        tools: &[ToolDefinition],
        min_ratio: f64,
    ) -> Vec<TriggerSuggestion> {
        let normalized = normalize(input);
        if normalized.is_empty() {
            return Vec::new();
        }

        let mut suggestions: Vec<TriggerSuggestion> = tools
            .iter()
            .filter(|tool| self.matcher.best_phrase(&normalized, tool).is_none())
            .filter_map(|tool| {
                self.matcher
                    .fuzzy_match(&normalized, &tool.trigger_phrases, min_ratio)
                    .map(|m| TriggerSuggestion {
                        tool: tool.name.clone(),
                        phrase: m.phrase.to_string(),
                        ratio: m.ratio,
                    })
            })
            .collect();
        suggestions.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
        suggestions
    }

    /// Match, extract and score, in supply order.
    fn score_candidates(&self, input: &str, tools: &[ToolDefinition]) -> Vec<Candidate> {
        let normalized = normalize(input);
        if normalized.is_empty() || tools.is_empty() {
            return Vec::new();
        }
        let text = input.trim();

        self.matcher
            .candidates(&normalized, tools)
            .into_iter()
            .map(|m| {
                let parameters = self.extractor.extract(text, m.tool, m.phrase);
                let breakdown = self.scorer.breakdown(&normalized, m.tool, &parameters);
                Candidate {
                    index: m.index,
                    tool: m.tool.name.clone(),
                    matched_phrase: m.phrase.to_string(),
                    confidence: breakdown.total,
                    parameters,
                    breakdown,
                }
            })
            .collect()
    }
}

/// Detect a tool with the default validator.
///
/// Convenience wrapper over [`IntentDetector`].
pub fn detect_tool_and_params(
    input: &str,
    tools: &[ToolDefinition],
    min_confidence: f64,
) -> Option<DetectionResult> {
    IntentDetector::new()
        .with_min_confidence(min_confidence)
        .detect(input, tools)
}
