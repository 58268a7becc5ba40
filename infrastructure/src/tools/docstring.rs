//! Docstring-style tool metadata.
//!
//! Tool descriptions written as free text may embed their trigger phrases
//! and examples:
//!
//! ```text
//! Look up stock information.
//!
//! Trigger phrases: stock price of, get quote for
//! Examples: Stock price of MSFT, Get quote for AAPL with history
//! ```
//!
//! Recognised directives (case-insensitive): `Trigger phrases:`,
//! `Triggers:`, `:trigger:`, `:trigger <phrase>`, `Examples:`,
//! `:examples:`. A directive with nothing after it starts a block: each
//! following non-blank line is one item, up to a blank line or the next
//! directive.

use regex::Regex;
use std::sync::LazyLock;

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?::(trigger|examples?):?|(trigger phrases|triggers|examples?):)\s*(.*)$")
        .expect("valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Triggers,
    Examples,
}

/// Metadata parsed from a tool docstring
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolDocstring {
    /// First plain line, used as the default description
    pub summary: Option<String>,
    pub triggers: Vec<String>,
    pub examples: Vec<String>,
}

impl ToolDocstring {
    pub fn parse(text: &str) -> Self {
        let mut doc = Self::default();
        let mut block: Option<Section> = None;

        for line in text.lines() {
            let trimmed = line.trim();

            if let Some(caps) = DIRECTIVE.captures(trimmed) {
                let keyword = caps
                    .get(1)
                    .or_else(|| caps.get(2))
                    .map_or("", |m| m.as_str())
                    .to_lowercase();
                let section = if keyword.starts_with("trigger") {
                    Section::Triggers
                } else {
                    Section::Examples
                };
                let rest = caps.get(3).map_or("", |m| m.as_str()).trim();
                if rest.is_empty() {
                    block = Some(section);
                } else {
                    for item in rest.split(',') {
                        doc.push(section, item);
                    }
                    block = None;
                }
                continue;
            }

            if trimmed.is_empty() || trimmed.starts_with(':') {
                block = None;
                continue;
            }

            match block {
                Some(section) => doc.push(section, trimmed),
                None if doc.summary.is_none() => doc.summary = Some(trimmed.to_string()),
                None => {}
            }
        }

        doc
    }

    fn push(&mut self, section: Section, raw: &str) {
        let item = raw
            .trim()
            .trim_start_matches(['-', '*'])
            .trim()
            .trim_matches(['"', '\''])
            .trim();
        if item.is_empty() {
            return;
        }
        match section {
            Section::Triggers => self.triggers.push(item.to_string()),
            Section::Examples => self.examples.push(item.to_string()),
        }
    }
}
