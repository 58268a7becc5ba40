//! Trigger phrase matching.
//!
//! A tool becomes a candidate only when one of its trigger phrases is a
//! literal substring of the normalized input. The fuzzy mode never gates
//! detection; it feeds "did you mean" suggestions.

use crate::tool::entities::ToolDefinition;

/// A tool whose trigger phrase occurs in the input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerMatch<'a> {
    /// Position of the tool in the caller-supplied list
    pub index: usize,
    pub tool: &'a ToolDefinition,
    /// The selected (longest) matching phrase, trimmed
    pub phrase: &'a str,
}

/// Best approximate phrase match for one tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch<'a> {
    pub phrase: &'a str,
    /// Normalized similarity in `[0, 1]`
    pub ratio: f64,
}

/// Finds tools whose trigger phrases occur in the input
#[derive(Debug, Clone, Copy, Default)]
pub struct TriggerMatcher;

impl TriggerMatcher {
    /// Longest trigger phrase of `tool` contained in `normalized`.
    ///
    /// Ties on length keep the phrase declared first. Blank phrases never
    /// match.
    pub fn best_phrase<'a>(&self, normalized: &str, tool: &'a ToolDefinition) -> Option<&'a str> {
        let mut best: Option<(&'a str, usize)> = None;
        for phrase in &tool.trigger_phrases {
            let phrase = phrase.trim();
            if phrase.is_empty() || !normalized.contains(phrase.to_lowercase().as_str()) {
                continue;
            }
            let len = phrase.chars().count();
            if best.is_none_or(|(_, best_len)| len > best_len) {
                best = Some((phrase, len));
            }
        }
        best.map(|(phrase, _)| phrase)
    }

    /// All candidate tools, in the order they were supplied
    pub fn candidates<'a>(
        &self,
        normalized: &str,
        tools: &'a [ToolDefinition],
    ) -> Vec<TriggerMatch<'a>> {
        tools
            .iter()
            .enumerate()
            .filter_map(|(index, tool)| {
                self.best_phrase(normalized, tool)
                    .map(|phrase| TriggerMatch { index, tool, phrase })
            })
            .collect()
    }

    /// Best phrase by similarity ratio, accepted when it reaches `min_ratio`.
    ///
    /// Each phrase is compared with the whole text and with every run of
    /// consecutive words as long as the phrase, so a typo inside a longer
    /// sentence still scores high.
    pub fn fuzzy_match<'a>(
        &self,
        normalized: &str,
        phrases: &'a [String],
        min_ratio: f64,
    ) -> Option<FuzzyMatch<'a>> {
        let words: Vec<&str> = normalized.split_whitespace().collect();
        let mut best: Option<FuzzyMatch<'a>> = None;

        for phrase in phrases {
            let trimmed = phrase.trim();
            if trimmed.is_empty() {
                continue;
            }
            let lowered = trimmed.to_lowercase();
            let ratio = similarity(normalized, &lowered, &words);
            if best.is_none_or(|b| ratio > b.ratio) {
                best = Some(FuzzyMatch {
                    phrase: trimmed,
                    ratio,
                });
            }
        }

        best.filter(|b| b.ratio >= min_ratio)
    }
}

fn similarity(normalized: &str, phrase: &str, words: &[&str]) -> f64 {
    let whole = strsim::normalized_levenshtein(normalized, phrase);
    let width = phrase.split_whitespace().count().max(1);
    if words.len() < width {
        return whole;
    }
    words
        .windows(width)
        .map(|window| strsim::normalized_levenshtein(&window.join(" "), phrase))
        .fold(whole, f64::max)
}
