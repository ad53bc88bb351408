//! Application service — validate and dispatch a prompt to an agent.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use noop_common::InvocationRequest;
use tracing::{debug, info};

use crate::application::ports::{AgentRuntime, RuntimeOutput};
use crate::domain::{Formatted, InvokeError, format_output, parse_request};

/// A completed dispatch: what was asked and what the runtime answered.
#[derive(Debug)]
pub struct Dispatched {
    pub request: InvocationRequest,
    pub output: RuntimeOutput,
}

impl Dispatched {
    /// Runtime stdout rendered for the terminal.
    #[must_use]
    pub fn formatted(&self) -> Formatted {
        format_output(&self.output.stdout_lossy())
    }
}

/// Validate raw CLI arguments, then dispatch.
///
/// Validation completes before the runtime is touched: usage and unknown-agent
/// errors never reach `runtime`.
///
/// # Errors
///
/// Returns `InvokeError::Usage`, `InvokeError::UnknownAgent`, or whatever the
/// runtime reports.
pub async fn invoke_agent(
    runtime: &impl AgentRuntime,
    agent: Option<&str>,
    prompt: Option<&str>,
) -> Result<Dispatched, InvokeError> {
    let request = parse_request(agent, prompt)?;
    dispatch(runtime, request).await
}

/// Send an already-validated request to the runtime.
///
/// # Errors
///
/// Returns `InvokeError::RuntimeInvocation` when the runtime fails.
pub async fn dispatch(
    runtime: &impl AgentRuntime,
    request: InvocationRequest,
) -> Result<Dispatched, InvokeError> {
    info!(agent = %request.agent, prompt_len = request.prompt.len(), "dispatching prompt");
    let output = runtime.invoke(&request).await?;
    debug!(
        agent = %request.agent,
        exit_code = output.exit_code,
        stdout_bytes = output.stdout.len(),
        stderr_bytes = output.stderr.len(),
        "agent runtime finished"
    );
    Ok(Dispatched { request, output })
}
