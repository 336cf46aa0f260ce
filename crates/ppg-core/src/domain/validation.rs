use std::path::{Component, Path};

use crate::domain::error::DomainError;

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Reject values that are empty once surrounding whitespace is removed.
    pub fn require_non_blank(field: &'static str, value: &str) -> Result<(), DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::InvalidArgument {
                field,
                reason: "must not be blank".into(),
            });
        }
        Ok(())
    }

    /// A template subpath is joined onto every ancestor during the upward
    /// search, so it must be relative, non-empty and stay below that ancestor.
    pub fn validate_template_subpath(path: &Path) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidTemplatePath {
            path: path.display().to_string(),
            reason: reason.into(),
        };

        if path.as_os_str().is_empty() {
            return Err(invalid("path is empty"));
        }
        if path.is_absolute() || path.has_root() {
            return Err(invalid("path must be relative"));
        }
        if path.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(invalid("path must not contain '..'"));
        }
        if !path.components().any(|c| matches!(c, Component::Normal(_))) {
            return Err(invalid("path does not name a directory"));
        }
        Ok(())
    }
}
