//! Local-process implementation of the `AgentRuntime` port.
//!
//! Each agent is a project directory under the agents root; the runtime CLI
//! is run from inside it as `<program> invoke '<payload-json>'`.

use std::path::PathBuf;

use noop_common::InvocationRequest;
use tracing::{debug, warn};

use crate::application::ports::{AgentRuntime, CommandRunner, RuntimeOutput};
use crate::domain::InvokeError;

/// Runs agents through the runtime CLI on this machine.
pub struct LocalAgentRuntime<R: CommandRunner> {
    runner: R,
    program: String,
    agents_dir: PathBuf,
}

impl<R: CommandRunner> LocalAgentRuntime<R> {
    #[must_use]
    pub fn new(runner: R, program: impl Into<String>, agents_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            program: program.into(),
            agents_dir: agents_dir.into(),
        }
    }

    /// Project directory the runtime is invoked from for `request`.
    #[must_use]
    pub fn agent_dir(&self, request: &InvocationRequest) -> PathBuf {
        self.agents_dir.join(request.agent.dir_name())
    }
}

impl<R: CommandRunner> AgentRuntime for LocalAgentRuntime<R> {
    async fn invoke(&self, request: &InvocationRequest) -> Result<RuntimeOutput, InvokeError> {
        let failed = |reason: String| InvokeError::RuntimeInvocation {
            agent: request.agent,
            reason,
        };

        let dir = self.agent_dir(request);
        if !dir.is_dir() {
            return Err(failed(format!(
                "agent directory not found: {}",
                dir.display()
            )));
        }

        let payload = request
            .payload_json()
            .map_err(|e| failed(format!("cannot encode payload: {e}")))?;

        debug!(program = %self.program, dir = %dir.display(), "invoking agent runtime");
        let output = self
            .runner
            .run_in_dir(&self.program, &["invoke", &payload], &dir)
            .await
            .map_err(|e| failed(format!("{e:#}")))?;

        let Some(exit_code) = output.status.code() else {
            warn!(agent = %request.agent, "agent runtime terminated by signal");
            return Err(failed(format!("{} terminated by signal", self.program)));
        };

        Ok(RuntimeOutput {
            exit_code,
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
