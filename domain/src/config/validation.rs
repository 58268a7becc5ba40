//! Configuration issues detected while loading settings and tool catalogs.
//!
//! Loading never stops at the first problem. Every check produces a
//! [`ConfigIssue`] with a [`Severity`]; callers decide whether errors abort
//! startup and how warnings are surfaced.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssueCode {
    /// A threshold or ratio lies outside `[0, 1]`.
    ThresholdOutOfRange { field: String, value: f64 },
    /// Two tools share a name; the later definition replaces the earlier one.
    DuplicateToolName { name: String },
    /// A parameter declares a type tag that is not recognised.
    UnknownParameterType {
        tool: String,
        parameter: String,
        value: String,
    },
    /// Two parameters of one tool share a name.
    DuplicateParameterName { tool: String, parameter: String },
    /// A tool definition has an empty name.
    EmptyToolName,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Check a `[0, 1]` setting, producing an error issue when out of range.
pub fn check_unit_interval(field: &str, value: f64) -> Option<ConfigIssue> {
    if (0.0..=1.0).contains(&value) {
        return None;
    }
    Some(ConfigIssue::error(
        ConfigIssueCode::ThresholdOutOfRange {
            field: field.to_string(),
            value,
        },
        format!("{}: {} is outside the range [0, 1]", field, value),
    ))
}
