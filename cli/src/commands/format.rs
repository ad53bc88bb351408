//! `noop format` — reformat captured agent runtime output.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::commands::read_input;
use crate::domain::format_output;

/// Arguments for the format command.
#[derive(Args)]
pub struct FormatArgs {
    /// File holding raw runtime output (default: stdin)
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

/// Run the format command. Never fails on malformed input.
///
/// # Errors
///
/// Returns an error only if the input cannot be read.
pub fn run(app: &AppContext, args: &FormatArgs) -> Result<ExitCode> {
    let raw = read_input(args.input.as_deref())?;
    let formatted = format_output(&raw);
    debug!(kind = ?formatted.kind, bytes = raw.len(), "formatted runtime output");
    app.renderer().render_formatted(&formatted)?;
    Ok(ExitCode::SUCCESS)
}
