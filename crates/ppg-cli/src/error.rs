//! Error handling for the ppg CLI.
//!
//! Provides structured errors with:
//! - A single-line user-facing message
//! - Actionable suggestions (shown with `-v`)
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use ppg_core::error::PpgError;

// Re-export so callers only need `use crate::error::*`.
pub use ppg_core::error::ErrorCategory as CoreCategory;

use crate::cli::USAGE;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input (blank value).
    #[error("{message}")]
    InvalidArgument {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The first argument is not a known command.
    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },

    /// Any other argument-shape problem, already rendered by clap
    /// (including its usage line).
    #[error("{message}")]
    Usage { message: String },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read or parsed, or holds an
    /// unusable value.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `ppg-core`.
    #[error("Failed to create plugin scaffold: {0}")]
    Core(#[from] PpgError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Translate a clap parse failure.
    ///
    /// Unknown subcommands get their own variant so the message names the
    /// command; everything else keeps clap's rendering.
    pub fn from_parse_error(err: &clap::Error) -> Self {
        use clap::error::{ContextKind, ContextValue, ErrorKind};

        match err.kind() {
            ErrorKind::InvalidSubcommand => {
                let command = match err.get(ContextKind::InvalidSubcommand) {
                    Some(ContextValue::String(command)) => command.clone(),
                    _ => String::from("<unknown>"),
                };
                Self::UnknownCommand { command }
            }
            _ => Self::Usage {
                message: err.render().to_string().trim_end().to_string(),
            },
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidArgument { .. } => vec![
                "PluginName, GroupId, and ArtifactId must not be blank".into(),
                "Use --help for usage information".into(),
            ],

            Self::UnknownCommand { command } => vec![
                format!("'{command}' is not a ppg command"),
                "Available commands: new, completions".into(),
            ],

            Self::Usage { .. } => vec![],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Check the file passed with --config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
            ],
        }
    }

    /// Get the error category, recorded with the debug event.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } => ErrorCategory::UserError,
            Self::UnknownCommand { .. } => ErrorCategory::UserError,
            Self::Usage { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Every failure exits with status 1 whatever its category.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Whether the usage text should follow the message.
    fn shows_usage(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::UnknownCommand { .. }
        )
    }

    /// Format the error for display with colors.
    pub fn format_colored(&self, verbose: bool) -> String {
        if let Self::Usage { message } = self {
            return format!("{message}\n");
        }

        let mut output = format!("{} {}\n", "\u{2717}".red().bold(), self.to_string().red());

        if self.shows_usage() {
            output.push_str(&format!("\n{}\n", USAGE.dimmed()));
        }

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "  {} {}\n",
                    "\u{2192}".dimmed(), // →
                    err.to_string().dimmed()
                ));
                source = err.source();
            }

            let suggestions = self.suggestions();
            if !suggestions.is_empty() {
                output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
                for suggestion in suggestions {
                    output.push_str(&format!("  {suggestion}\n"));
                }
            }
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        if let Self::Usage { message } = self {
            return format!("{message}\n");
        }

        let mut out = format!("{self}\n");

        if self.shows_usage() {
            out.push_str(&format!("\n{USAGE}\n"));
        }

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }

            let suggestions = self.suggestions();
            if !suggestions.is_empty() {
                out.push_str("\nSuggestions:\n");
                for s in &suggestions {
                    out.push_str(&format!("  {s}\n"));
                }
            }
        }

        out
    }

    /// Record the error as a debug event.
    ///
    /// The caller prints the user-facing message, so nothing is emitted
    /// below `-vv`.
    pub fn log(&self) {
        tracing::debug!(category = ?self.category(), "Command failed: {}", self);

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use ppg_core::{application::ApplicationError, domain::PluginRequest};

    fn output_exists() -> CliError {
        CliError::Core(
            ApplicationError::OutputExists {
                path: PathBuf::from("/tmp/demo"),
            }
            .into(),
        )
    }

    // ── messages ──────────────────────────────────────────────────────────

    #[test]
    fn core_errors_are_prefixed() {
        assert_eq!(
            output_exists().to_string(),
            "Failed to create plugin scaffold: Output directory already exists: /tmp/demo"
        );
    }

    #[test]
    fn unknown_command_names_the_command() {
        let err = CliError::UnknownCommand {
            command: "generate".into(),
        };
        assert_eq!(err.to_string(), "Unknown command: generate");
    }

    #[test]
    fn parse_errors_are_classified() {
        use clap::Parser;
        use crate::cli::Cli;

        let unknown = Cli::try_parse_from(["ppg", "generate"]).unwrap_err();
        assert!(matches!(
            CliError::from_parse_error(&unknown),
            CliError::UnknownCommand { ref command } if command == "generate"
        ));

        let missing = Cli::try_parse_from(["ppg", "new", "Foo"]).unwrap_err();
        match CliError::from_parse_error(&missing) {
            CliError::Usage { message } => assert!(message.contains("Usage")),
            other => panic!("expected Usage, got {other:?}"),
        }
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn output_exists_suggests_other_artifact() {
        assert!(
            output_exists()
                .suggestions()
                .iter()
                .any(|s| s.contains("ArtifactId"))
        );
    }

    #[test]
    fn blank_value_suggestions_non_empty() {
        let domain = PluginRequest::new("", "g", "a").unwrap_err();
        let err = CliError::InvalidArgument {
            message: domain.to_string(),
            source: Some(Box::new(domain)),
        };
        assert!(!err.suggestions().is_empty());
        assert_eq!(err.category(), ErrorCategory::UserError);
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn every_error_exits_with_one() {
        let errors = vec![
            CliError::InvalidArgument {
                message: "x".into(),
                source: None,
            },
            CliError::UnknownCommand {
                command: "x".into(),
            },
            CliError::Usage {
                message: "x".into(),
            },
            CliError::ConfigError {
                message: "x".into(),
                source: None,
            },
            output_exists(),
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            },
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1, "{err:?}");
        }
    }

    #[test]
    fn categories_follow_core() {
        let not_found = CliError::Core(
            ApplicationError::TemplateNotFound {
                start: PathBuf::from("/w"),
                subpath: PathBuf::from("template/plugin-template"),
            }
            .into(),
        );
        assert_eq!(not_found.category(), ErrorCategory::NotFound);
        assert_eq!(output_exists().category(), ErrorCategory::UserError);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_is_single_line_by_default() {
        let s = output_exists().format_plain(false);
        assert_eq!(s.lines().count(), 1);
        assert!(s.starts_with("Failed to create plugin scaffold:"));
    }

    #[test]
    fn format_plain_verbose_adds_suggestions() {
        let s = output_exists().format_plain(true);
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_appends_usage_for_argument_errors() {
        let err = CliError::UnknownCommand {
            command: "x".into(),
        };
        let s = err.format_plain(false);
        assert!(s.contains("ppg new <PluginName> <GroupId> <ArtifactId>"));
    }

    #[test]
    fn format_plain_passes_clap_rendering_through() {
        let err = CliError::Usage {
            message: "error: boom\n\nUsage: ppg new".into(),
        };
        assert_eq!(err.format_plain(true), "error: boom\n\nUsage: ppg new\n");
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading working directory");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
