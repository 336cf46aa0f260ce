//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

/// Usage text printed after argument-shape errors.
pub const USAGE: &str = "Usage:\n  ppg new <PluginName> <GroupId> <ArtifactId>";

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ppg",
    bin_name = "ppg",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Plugin project generator",
    long_about = "ppg copies the nearest template/plugin-template directory \
                  into a new project directory and fills in its \
                  __PLUGIN_NAME__, __GROUP_ID__ and __ARTIFACT_ID__ placeholders.",
    after_help = "EXAMPLES:\n\
        \x20 ppg new MyPlugin com.example my-plugin\n\
        \x20 ppg -v new MyPlugin com.example my-plugin\n\
        \x20 ppg completions bash > ~/.local/share/bash-completion/completions/ppg",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new plugin project from the template.
    #[command(
        about = "Create a new plugin project",
        after_help = "The template is looked up as template/plugin-template in the \
            working directory or any of its parents. The project is written to \
            ./<ArtifactId>, which must not exist yet.\n\n\
            EXAMPLES:\n\
            \x20 ppg new MyPlugin com.example my-plugin"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 ppg completions bash > ~/.local/share/bash-completion/completions/ppg\n\
            \x20 ppg completions zsh  > ~/.zfunc/_ppg\n\
            \x20 ppg completions fish > ~/.config/fish/completions/ppg.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `ppg new`.
///
/// Values are taken verbatim here; trimming and the non-blank check happen
/// when the core `PluginRequest` is built.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Human-readable plugin name, substituted for `__PLUGIN_NAME__`.
    #[arg(value_name = "PluginName", help = "Plugin name")]
    pub plugin_name: String,

    /// Group id, substituted for `__GROUP_ID__`.
    #[arg(value_name = "GroupId", help = "Group id, e.g. com.example")]
    pub group_id: String,

    /// Artifact id, substituted for `__ARTIFACT_ID__` and used as the output
    /// directory name.
    #[arg(value_name = "ArtifactId", help = "Artifact id and output directory")]
    pub artifact_id: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `ppg completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
