//! `noop investigate` — root-cause a CloudWatch alarm with the investigator agent.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::services::investigation::investigate_alarm;
use crate::commands::read_input;
use crate::output::{SilentReporter, TerminalReporter};

/// Arguments for the investigate command.
#[derive(Args)]
pub struct InvestigateArgs {
    /// Alarm state-change event JSON (default: stdin)
    #[arg(long, short)]
    pub event: Option<PathBuf>,

    /// Write the HTML report to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Run the investigate command.
///
/// # Errors
///
/// Returns an error if the event is invalid, the investigator fails, or the
/// report cannot be written.
pub async fn run(app: &AppContext, args: InvestigateArgs) -> Result<ExitCode> {
    let event_json = read_input(args.event.as_deref())?;
    let runtime = app.runtime();
    let theme = &app.config.investigation.theme_color;

    let report = if app.is_json() {
        investigate_alarm(&runtime, &SilentReporter, &event_json, theme).await?
    } else {
        let reporter = TerminalReporter::new(&app.output);
        investigate_alarm(&runtime, &reporter, &event_json, theme).await?
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, &report.html)
                .with_context(|| format!("cannot write {}", path.display()))?;
            if app.is_json() {
                app.renderer().render_report(&report)?;
            } else {
                app.output
                    .success(&format!("Report written: {}", path.display()));
            }
        }
        None => app.renderer().render_report(&report)?,
    }
    Ok(ExitCode::SUCCESS)
}
