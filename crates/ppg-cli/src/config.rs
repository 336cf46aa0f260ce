//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate only sees the values derived from it
//! (a [`TemplateLayout`]).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. The file named by `--config`, if any (TOML, YAML or JSON by extension)
//! 3. Built-in defaults (always present)
//!
//! Without `--config` no file is read at all.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use ppg_core::domain::{DEFAULT_TEMPLATE_SUBPATH, TemplateLayout};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Template lookup settings.
    pub template: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Template location below each searched ancestor directory.
    pub subpath: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            subpath: PathBuf::from(DEFAULT_TEMPLATE_SUBPATH),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`.  Missing
    /// keys keep their defaults; a missing or malformed file is an error.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = config_file else {
            return Ok(Self::default());
        };

        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(true))
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// The validated template layout to search for.
    pub fn template_layout(&self) -> CliResult<TemplateLayout> {
        TemplateLayout::new(self.template.subpath.clone()).map_err(|e| CliError::ConfigError {
            message: e.to_string(),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_subpath_is_plugin_template() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.template.subpath, PathBuf::from("template/plugin-template"));
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn load_reads_toml_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ppg.toml");
        fs::write(&path, "[template]\nsubpath = \"blueprints/plugin\"\n").unwrap();

        let cfg = AppConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(cfg.template.subpath, PathBuf::from("blueprints/plugin"));
        // Unset sections keep their defaults.
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let tmp = TempDir::new().unwrap();
        assert!(AppConfig::load(Some(tmp.path().join("absent.toml").as_path())).is_err());
    }

    #[test]
    fn absolute_subpath_is_a_config_error() {
        let cfg = AppConfig {
            template: TemplateConfig {
                subpath: PathBuf::from("/etc/template"),
            },
            ..AppConfig::default()
        };
        assert!(matches!(
            cfg.template_layout(),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn default_layout_is_valid() {
        assert!(AppConfig::default().template_layout().is_ok());
    }
}
