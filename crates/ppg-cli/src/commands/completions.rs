//! Shell completion generation.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::CliResult;

const BIN_NAME: &str = "ppg";

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut stdout = std::io::stdout();
    write_completions(args.shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}

fn write_completions(shell: Shell, buf: &mut dyn Write) {
    match shell {
        Shell::Bash => render(shells::Bash, buf),
        Shell::Zsh => render(shells::Zsh, buf),
        Shell::Fish => render(shells::Fish, buf),
        Shell::PowerShell => render(shells::PowerShell, buf),
        Shell::Elvish => render(shells::Elvish, buf),
    }
}

fn render<G: Generator>(generator: G, buf: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(generator, &mut cmd, BIN_NAME, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completions_for(shell: Shell) -> String {
        let mut buf = Vec::new();
        write_completions(shell, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bash_completions_mention_subcommands() {
        let script = completions_for(Shell::Bash);
        assert!(script.contains("ppg"));
        assert!(script.contains("new"));
        assert!(script.contains("completions"));
    }

    #[test]
    fn every_shell_produces_output() {
        for shell in [
            Shell::Bash,
            Shell::Zsh,
            Shell::Fish,
            Shell::PowerShell,
            Shell::Elvish,
        ] {
            assert!(!completions_for(shell).is_empty(), "{shell:?}");
        }
    }
}
