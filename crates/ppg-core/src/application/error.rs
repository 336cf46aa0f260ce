//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business rules.
//! Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while scaffolding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// No ancestor of the start directory contains the template subpath.
    #[error("Template directory '{}' not found from working directory: {}", subpath.display(), start.display())]
    TemplateNotFound { start: PathBuf, subpath: PathBuf },

    /// The output directory exists before anything was written.
    #[error("Output directory already exists: {}", path.display())]
    OutputExists { path: PathBuf },

    /// Replicating the template tree failed; the partial output is kept.
    #[error("Failed to copy {}: {reason}", path.display())]
    CopyFailed { path: PathBuf, reason: String },

    /// A single filesystem operation outside the copy failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned).
    #[error("Filesystem store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { start, subpath } => vec![
                format!(
                    "No '{}' directory in {} or any of its parents",
                    subpath.display(),
                    start.display()
                ),
                "Run ppg from inside a checkout that contains the plugin template".into(),
            ],
            Self::OutputExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Choose a different ArtifactId".into(),
                format!("Or remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::CopyFailed { path, .. } => vec![
                format!("Failed to copy: {}", path.display()),
                "Check file permissions and available disk space".into(),
                "The partially written output directory was left in place".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
            ],
            Self::StoreLockError => vec!["The in-memory filesystem is poisoned".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::OutputExists { .. } => ErrorCategory::Conflict,
            Self::CopyFailed { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
