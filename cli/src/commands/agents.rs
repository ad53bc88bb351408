//! `noop agents` — list the agents that can be invoked.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use noop_common::AgentKind;

use crate::app::AppContext;

/// Run the agents command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let agents_dir = Path::new(&app.config.runtime.agents_dir);
    app.renderer().render_agents(&AgentKind::ALL, agents_dir)?;
    Ok(ExitCode::SUCCESS)
}
