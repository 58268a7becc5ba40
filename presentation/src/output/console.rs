//! Console output formatter for detection results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use intentai_application::DetectIntentOutput;
use intentai_domain::{DetectionResult, ToolSpec};
use serde_json::Value;

/// Formats detection results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the detection outcome
    pub fn format(output: &DetectIntentOutput) -> String {
        let mut text = String::new();

        match &output.detection {
            Some(result) => {
                text.push_str(&Self::format_detection(result));
                let others: Vec<_> = output
                    .candidates
                    .iter()
                    .filter(|c| c.tool != result.tool)
                    .collect();
                if !others.is_empty() {
                    text.push_str(&format!("\n{}\n", "Other candidates:".cyan().bold()));
                    for candidate in others {
                        text.push_str(&format!(
                            "  {} {:.2} (\"{}\")\n",
                            candidate.tool,
                            candidate.confidence,
                            candidate.matched_phrase
                        ));
                    }
                }
            }
            None => {
                text.push_str(&format!("{}\n", "No tool detected".yellow().bold()));

                if !output.candidates.is_empty() {
                    text.push_str(&format!(
                        "\n{}\n",
                        "Below threshold:".cyan().bold()
                    ));
                    for candidate in &output.candidates {
                        text.push_str(&format!(
                            "  {} {:.2} (\"{}\"){}\n",
                            candidate.tool,
                            candidate.confidence,
                            candidate.matched_phrase,
                            if candidate.breakdown.penalized {
                                " missing required parameters"
                            } else {
                                ""
                            }
                        ));
                    }
                }

                if !output.suggestions.is_empty() {
                    text.push_str(&format!("\n{}\n", "Did you mean:".cyan().bold()));
                    for suggestion in &output.suggestions {
                        text.push_str(&format!(
                            "  \"{}\" ({}, {:.2})\n",
                            suggestion.phrase, suggestion.tool, suggestion.ratio
                        ));
                    }
                }
            }
        }

        text
    }

    fn format_detection(result: &DetectionResult) -> String {
        let mut text = format!(
            "{} {} {}\n",
            "Detected:".green().bold(),
            result.tool.bold(),
            format!("(confidence {:.2})", result.confidence).dimmed()
        );

        if !result.parameters.is_empty() {
            text.push_str(&format!("{}\n", "Parameters:".cyan().bold()));
            for (name, value) in &result.parameters {
                text.push_str(&format!("  {} = {}\n", name, Self::value(value)));
            }
        }

        if !result.missing_parameters.is_empty() {
            text.push_str(&format!(
                "{} {}\n",
                "Missing:".red().bold(),
                result.missing_parameters.join(", ")
            ));
        }

        for error in &result.validation_errors {
            text.push_str(&format!("{} {}\n", "Error:".red().bold(), error));
        }

        text
    }

    fn value(value: &Value) -> String {
        match value {
            Value::String(s) => format!("\"{}\"", s),
            other => other.to_string(),
        }
    }

    /// Format as JSON
    pub fn format_json(output: &DetectIntentOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the registered tools, one block per tool
    pub fn format_tools(spec: &ToolSpec) -> String {
        let mut text = String::new();
        for tool in spec.all() {
            text.push_str(&format!("{}", tool.name.bold()));
            if !tool.description.is_empty() {
                text.push_str(&format!(" - {}", tool.description));
            }
            text.push('\n');

            text.push_str(&format!(
                "  {} {}\n",
                "triggers:".dimmed(),
                tool.trigger_phrases.join(", ")
            ));
            for param in &tool.parameters {
                let marker = if param.required { "*" } else { " " };
                let default = param
                    .default
                    .as_ref()
                    .map(|d| format!(" = {}", Self::value(d)))
                    .unwrap_or_default();
                text.push_str(&format!(
                    "  {}{} ({}){}\n",
                    marker, param.name, param.param_type, default
                ));
            }
        }
        text
    }

    /// Pretty-print a schema document
    pub fn format_schema(schema: &Value) -> String {
        serde_json::to_string_pretty(schema).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, output: &DetectIntentOutput) -> String {
        Self::format(output)
    }

    fn format_json(&self, output: &DetectIntentOutput) -> String {
        Self::format_json(output)
    }

    fn format_tools(&self, spec: &ToolSpec) -> String {
        Self::format_tools(spec)
    }
}
