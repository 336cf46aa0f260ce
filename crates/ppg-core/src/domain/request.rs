//! The validated input of a single `new` invocation.

use std::fmt;

use crate::domain::{error::DomainError, validation::DomainValidator as validator};

/// The three values a plugin scaffold is generated from.
///
/// Values are trimmed on construction and guaranteed non-blank afterwards,
/// so every other component can use them without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginRequest {
    plugin_name: String,
    group_id: String,
    artifact_id: String,
}

impl PluginRequest {
    /// Trim and validate the raw values.
    ///
    /// Fails with [`DomainError::InvalidArgument`] naming the first blank
    /// value, checked in argument order.
    pub fn new(
        plugin_name: impl AsRef<str>,
        group_id: impl AsRef<str>,
        artifact_id: impl AsRef<str>,
    ) -> Result<Self, DomainError> {
        let plugin_name = plugin_name.as_ref().trim();
        let group_id = group_id.as_ref().trim();
        let artifact_id = artifact_id.as_ref().trim();

        validator::require_non_blank("PluginName", plugin_name)?;
        validator::require_non_blank("GroupId", group_id)?;
        validator::require_non_blank("ArtifactId", artifact_id)?;

        Ok(Self {
            plugin_name: plugin_name.to_owned(),
            group_id: group_id.to_owned(),
            artifact_id: artifact_id.to_owned(),
        })
    }

    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }
}

impl fmt::Display for PluginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}:{})",
            self.plugin_name, self.group_id, self.artifact_id
        )
    }
}
