// ============================================================================
// domain/error.rs - DOMAIN RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (safe to carry through reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// A plugin request value was missing or blank after trimming.
    #[error("Invalid argument: {field} {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    /// The configured template location cannot be searched for.
    #[error("Invalid template path '{path}': {reason}")]
    InvalidTemplatePath { path: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidArgument { field, .. } => vec![
                format!("Provide a non-blank value for {field}"),
                "PluginName, GroupId, and ArtifactId must not be blank".into(),
                "Example: ppg new MyPlugin com.example my-plugin".into(),
            ],
            Self::InvalidTemplatePath { path, .. } => vec![
                format!("'{path}' cannot be used as a template location"),
                "Use a relative path such as template/plugin-template".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } => ErrorCategory::Validation,
            Self::InvalidTemplatePath { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}
