//! Output management and formatting.
//!
//! stdout carries the result line; diagnostics go through `tracing` to
//! stderr.

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Prefix of the line printed after a successful scaffold.
pub const CREATED_PREFIX: &str = "Plugin scaffold created at:";

/// Manages CLI output based on configuration.
pub struct OutputManager {
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// Colour is used only when stdout is a terminal and neither
    /// `--no-color`, `NO_COLOR` nor `output.no_color` disable it.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let color_allowed = !(args.no_color || config.output.no_color);
        Self {
            quiet: args.quiet,
            color: color_allowed && io::stdout().is_terminal(),
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Command result; printed even in quiet mode.
    pub fn result(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// The success line for a finished scaffold.
    pub fn created(&self, path: &Path) -> io::Result<()> {
        self.result(&self.created_line(path))
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.color {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        } else {
            format!("\u{2139} {msg}") // ℹ
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.color {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        } else {
            format!("\u{26a0} {msg}") // ⚠
        };
        self.term.write_line(&line)
    }

    fn created_line(&self, path: &Path) -> String {
        if self.color {
            format!("{CREATED_PREFIX} {}", path.display().green().bold())
        } else {
            format!("{CREATED_PREFIX} {}", path.display())
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
