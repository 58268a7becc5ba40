//! Parameter extraction heuristics.
//!
//! Values are read from the *remainder*: the original-case text following
//! the first case-insensitive occurrence of the matched trigger phrase.
//!
//! | Type | Rule |
//! |------|------|
//! | number | first run of ASCII digits |
//! | boolean | `with` / `without` alongside the parameter name |
//! | string `city` | text after the last `in`, unit words removed |
//! | string `query` | the whole remainder |
//! | other string | text after the parameter name, up to clause end |
//! | object | never extracted |
//!
//! Unset parameters then fall back to their declared default.

use crate::core::string::{find_ignore_case, find_word_ignore_case, truncate_at_clause_end, words};
use crate::tool::entities::{ParameterType, ToolDefinition, ToolParameter};
use serde_json::Value;
use std::collections::BTreeMap;

/// Temperature unit words stripped from `city` values
const UNIT_WORDS: &[&str] = &["celsius", "fahrenheit", "kelvin"];

/// Derives parameter values from the text following a trigger phrase
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterExtractor;

impl ParameterExtractor {
    /// Extract values for every declared parameter of `tool`.
    ///
    /// The mapping may be partial; absent values are not an error.
    pub fn extract(&self, text: &str, tool: &ToolDefinition, phrase: &str) -> BTreeMap<String, Value> {
        let remainder = remainder_after(text, phrase);
        let mut values = BTreeMap::new();

        for (position, param) in tool.parameters.iter().enumerate() {
            let value = match param.param_type {
                ParameterType::Number => first_number(remainder),
                ParameterType::Boolean => boolean_flag(remainder, &param.name),
                ParameterType::String => string_value(remainder, param, position == 0),
                ParameterType::Object => None,
            };
            if let Some(value) = value {
                values.insert(param.name.clone(), value);
            }
        }

        for param in &tool.parameters {
            if let Some(default) = &param.default {
                values
                    .entry(param.name.clone())
                    .or_insert_with(|| default.clone());
            }
        }

        values
    }
}

/// Original-case text strictly after the first occurrence of `phrase`
pub fn remainder_after<'t>(text: &'t str, phrase: &str) -> &'t str {
    find_ignore_case(text, phrase.trim()).map_or("", |(_, end)| &text[end..])
}

fn first_number(remainder: &str) -> Option<Value> {
    let start = remainder.find(|c: char| c.is_ascii_digit())?;
    let tail = &remainder[start..];
    let end = tail
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(tail.len());
    let digits = &tail[..end];

    match digits.parse::<u64>() {
        Ok(n) => Some(Value::from(n)),
        Err(_) => digits
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number),
    }
}

fn boolean_flag(remainder: &str, name: &str) -> Option<Value> {
    let mentioned = name_forms(name).any(|form| find_word_ignore_case(remainder, &form).is_some());
    if !mentioned {
        return None;
    }

    let mut flag = None;
    let words: Vec<String> = words(remainder).collect();
    if words.iter().any(|w| w == "with") {
        flag = Some(true);
    }
    if words.iter().any(|w| w == "without") {
        flag = Some(false);
    }
    flag.map(Value::Bool)
}

/// Ways a parameter name may show up in text: `include_volume`,
/// `include volume`, and segments of three or more characters (`volume`).
fn name_forms(name: &str) -> impl Iterator<Item = String> + '_ {
    let spaced = name.replace('_', " ");
    let segments = name
        .split('_')
        .filter(|s| s.chars().count() >= 3)
        .map(str::to_string);
    [name.to_string(), spaced].into_iter().chain(segments)
}

fn string_value(remainder: &str, param: &ToolParameter, is_first: bool) -> Option<Value> {
    let value = match param.name.as_str() {
        "city" => city(remainder),
        "query" => remainder.trim().to_string(),
        name => match find_word_ignore_case(remainder, name) {
            Some((_, end)) => {
                let rest = remainder[end..]
                    .trim_start()
                    .trim_start_matches([':', '=']);
                truncate_at_clause_end(rest).trim().to_string()
            }
            None if is_first => truncate_at_clause_end(remainder).trim().to_string(),
            None => String::new(),
        },
    };
    (!value.is_empty()).then(|| Value::String(value))
}

fn city(remainder: &str) -> String {
    let mut tokens: Vec<&str> = remainder
        .split_whitespace()
        .filter(|token| !UNIT_WORDS.contains(&bare(token).as_str()))
        .collect();

    // A removed unit leaves its connector behind ("New York in fahrenheit")
    while tokens.last().is_some_and(|t| bare(t) == "in") {
        tokens.pop();
    }

    let start = tokens
        .iter()
        .rposition(|t| bare(t) == "in")
        .map_or(0, |pos| pos + 1);

    tokens[start..]
        .join(" ")
        .trim_end_matches(['?', '!', '.', ',', ';'])
        .trim()
        .to_string()
}

fn bare(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}
