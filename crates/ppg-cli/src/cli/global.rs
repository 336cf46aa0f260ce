//! Flags accepted before or after any subcommand.
//!
//! None of them change what `ppg new` writes. They tune diagnostics,
//! colour, and where the template is looked up.

use std::path::PathBuf;

use clap::{ArgAction, Args};

/// Diagnostics, presentation and configuration flags.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Show more detail: -v adds a summary and error suggestions, -vv debug
    /// events, -vvv every probed and copied path.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print only the result line and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colour codes (also set by NO_COLOR).
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read settings from this TOML, YAML or JSON file.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// Whether failures should include their cause chain and suggestions.
    pub fn is_verbose(&self) -> bool {
        self.verbose > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_silent_and_colored() {
        let args = GlobalArgs::default();
        assert!(!args.is_verbose());
        assert!(!args.quiet);
        assert!(!args.no_color);
        assert!(args.config.is_none());
    }

    #[test]
    fn any_verbose_count_is_verbose() {
        let args = GlobalArgs {
            verbose: 2,
            ..GlobalArgs::default()
        };
        assert!(args.is_verbose());
    }
}
