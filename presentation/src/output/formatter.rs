//! Output formatter trait

use intentai_application::DetectIntentOutput;
use intentai_domain::ToolSpec;

/// Trait for formatting detection outcomes
pub trait OutputFormatter {
    /// Format the detection outcome for humans
    fn format(&self, output: &DetectIntentOutput) -> String;

    /// Format as JSON
    fn format_json(&self, output: &DetectIntentOutput) -> String;

    /// Format the registered tools
    fn format_tools(&self, spec: &ToolSpec) -> String;
}
