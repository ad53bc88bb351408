//! `noop invoke` — send a prompt to one agent and print its answer.

use std::io::Write as _;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::dispatch::invoke_agent;
use crate::commands::exit_code_from;
use crate::output::progress;

/// Arguments for the invoke command.
#[derive(Args)]
pub struct InvokeArgs {
    /// Agent to invoke: alarming, discovery, investigator or reporting
    pub agent: Option<String>,

    /// Prompt sent to the agent
    pub prompt: Option<String>,

    /// Print the runtime output without reformatting it
    #[arg(long)]
    pub raw: bool,
}

/// Run the invoke command. The exit code is the agent runtime's.
///
/// # Errors
///
/// Returns an `InvokeError` for missing arguments, an unknown agent, or a
/// runtime that cannot be run to completion.
pub async fn run(app: &AppContext, args: InvokeArgs) -> Result<ExitCode> {
    let runtime = app.runtime();

    let spinner = (app.output.show_progress() && !app.is_json()).then(|| {
        progress::spinner(&format!(
            "Waiting for {}...",
            args.agent.as_deref().unwrap_or("agent")
        ))
    });
    let result = invoke_agent(&runtime, args.agent.as_deref(), args.prompt.as_deref()).await;
    if let Some(pb) = &spinner {
        progress::clear(pb);
    }
    let dispatched = result?;

    if !dispatched.output.stderr.is_empty() {
        let mut stderr = std::io::stderr().lock();
        stderr.write_all(&dispatched.output.stderr)?;
        stderr.flush()?;
    }

    let answer = if args.raw {
        dispatched.output.stdout_lossy()
    } else {
        dispatched.formatted().text
    };
    app.renderer().render_answer(
        dispatched.request.agent,
        dispatched.output.exit_code,
        &answer,
    )?;

    if !dispatched.output.success() {
        app.output.warn(&format!(
            "{} exited with code {}",
            dispatched.request.agent, dispatched.output.exit_code
        ));
    }
    Ok(exit_code_from(dispatched.output.exit_code))
}
