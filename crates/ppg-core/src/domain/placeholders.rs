//! Placeholder tokens and their substitution.
//!
//! A template file refers to request values through literal tokens of the
//! form `__NAME__`:
//!
//! | Token              | Value        |
//! |--------------------|--------------|
//! | `__PLUGIN_NAME__`  | `PluginName` |
//! | `__GROUP_ID__`     | `GroupId`    |
//! | `__ARTIFACT_ID__`  | `ArtifactId` |

use crate::domain::request::PluginRequest;

pub const PLUGIN_NAME_TOKEN: &str = "__PLUGIN_NAME__";
pub const GROUP_ID_TOKEN: &str = "__GROUP_ID__";
pub const ARTIFACT_ID_TOKEN: &str = "__ARTIFACT_ID__";

/// Ordered token → value mapping.
///
/// Entries are applied in insertion order, one full pass per entry. Text
/// produced by an earlier entry is visible to later entries; nothing guards
/// against a value containing another entry's token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMap {
    entries: Vec<(String, String)>,
}

impl PlaceholderMap {
    /// The standard mapping for a plugin request.
    pub fn for_request(request: &PluginRequest) -> Self {
        let mut map = Self::empty();
        map.insert(PLUGIN_NAME_TOKEN, request.plugin_name());
        map.insert(GROUP_ID_TOKEN, request.group_id());
        map.insert(ARTIFACT_ID_TOKEN, request.artifact_id());
        map
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry, or replace the value of an existing token in place.
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        let token = token.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(t, _)| *t == token) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((token, value)),
        }
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every literal occurrence of each token, in order.
    pub fn apply(&self, content: &str) -> String {
        let mut result = content.to_string();

        for (token, value) in &self.entries {
            if token.is_empty() {
                continue;
            }
            result = result.replace(token.as_str(), value);
        }

        result
    }
}
