// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports carry them by value)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidContextValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Duplicate path in skeleton: {path}")]
    DuplicatePath { path: String },

    #[error("Invocation has no program")]
    EmptyProgram,

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidContextValue { field, reason, .. } => vec![
                format!("The {} is not usable: {}", field, reason),
                "Package names and slugs become directory names".into(),
                "Examples: demo_pkg, demo-project".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for '{}'", field),
                format!("Pass --{} or include it in the context JSON", field.replace('_', "-")),
            ],
            Self::EmptyProgram => vec![
                "Set vcs.program and hooks.program to a non-empty command".into(),
                "Check PYSEED_VCS__PROGRAM and PYSEED_HOOKS__PROGRAM".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidContextValue { .. }
            | Self::MissingRequiredField { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::EmptyProgram => ErrorCategory::Validation,
            Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
