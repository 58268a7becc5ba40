//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Detection itself never fails; these cover tool registration and
/// caller-supplied settings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown parameter type: {0}")]
    UnknownParameterType(String),

    #[error("Tool already registered: {0}")]
    DuplicateTool(String),

    #[error("Duplicate parameter '{parameter}' in tool '{tool}'")]
    DuplicateParameter { tool: String, parameter: String },

    #[error("Confidence threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DomainError::DuplicateTool("calculator".to_string());
        assert_eq!(error.to_string(), "Tool already registered: calculator");

        let error = DomainError::InvalidThreshold(1.5);
        assert_eq!(
            error.to_string(),
            "Confidence threshold must be within [0, 1], got 1.5"
        );
    }
}
