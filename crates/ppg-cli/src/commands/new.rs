//! Implementation of the `ppg new` command.
//!
//! Responsibility: turn CLI arguments into a `PluginRequest`, call the core
//! scaffold service, and display the result. No business logic lives here.

use tracing::{info, instrument};

use ppg_adapters::LocalFilesystem;
use ppg_core::{
    application::ScaffoldService,
    domain::{PluginRequest, ScaffoldOutcome},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `ppg new` command.
///
/// 1. Validate the three values
/// 2. Resolve the working directory
/// 3. Scaffold via `ScaffoldService`
/// 4. Print the created path (and a summary with `-v`)
#[instrument(skip_all, fields(artifact = %args.artifact_id))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = build_request(&args)?;
    let layout = config.template_layout()?;

    let working_dir =
        std::env::current_dir().with_cli_context(|| "failed to read the working directory")?;

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new())).with_layout(layout);

    info!(request = %request, "Scaffold started");
    let outcome = service.scaffold(&request, &working_dir)?;
    info!(path = %outcome.output_dir().display(), "Scaffold completed");

    output.created(outcome.output_dir())?;

    if global.is_verbose() {
        report_summary(&outcome, &output)?;
    }

    Ok(())
}

/// Validate and trim the positional values.
fn build_request(args: &NewArgs) -> CliResult<PluginRequest> {
    PluginRequest::new(&args.plugin_name, &args.group_id, &args.artifact_id).map_err(|e| {
        CliError::InvalidArgument {
            message: e.to_string(),
            source: Some(Box::new(e)),
        }
    })
}

fn report_summary(outcome: &ScaffoldOutcome, out: &OutputManager) -> CliResult<()> {
    out.info(&format!("Template:    {}", outcome.template_root.display()))?;
    out.info(&format!(
        "Copied:      {} directories, {} files",
        outcome.copy.directories, outcome.copy.files
    ))?;
    out.info(&format!(
        "Substituted: {} rewritten, {} unchanged",
        outcome.substitution.rewritten, outcome.substitution.unchanged
    ))?;
    if outcome.substitution.skipped > 0 {
        out.warning(&format!(
            "{} file(s) left as copied (not UTF-8 text, or not readable/writable)",
            outcome.substitution.skipped
        ))?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str, group: &str, artifact: &str) -> NewArgs {
        NewArgs {
            plugin_name: name.into(),
            group_id: group.into(),
            artifact_id: artifact.into(),
        }
    }

    #[test]
    fn values_are_trimmed() {
        let request = build_request(&args(" Foo ", "com.example\t", " demo")).unwrap();
        assert_eq!(request.plugin_name(), "Foo");
        assert_eq!(request.group_id(), "com.example");
        assert_eq!(request.artifact_id(), "demo");
    }

    #[test]
    fn blank_value_is_invalid_argument() {
        let err = build_request(&args("Foo", "   ", "demo")).unwrap_err();
        match err {
            CliError::InvalidArgument { message, source } => {
                assert!(message.starts_with("Invalid argument"));
                assert!(message.contains("GroupId"));
                assert!(source.is_some());
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn first_blank_value_is_reported() {
        let err = build_request(&args("", "", "")).unwrap_err();
        assert!(err.to_string().contains("PluginName"));
    }
}
