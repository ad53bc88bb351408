//! Application context — unified state passed to every command handler.
//!
//! `AppContext` is built once in `Cli::run()` from the global flags and the
//! loaded configuration. Commands take `&AppContext` and ask it for the
//! renderer, the agent runtime and the dependency resolver.

use std::time::Duration;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::NoopConfig;
use crate::infra::agent_runtime::LocalAgentRuntime;
use crate::infra::command_runner::{DEFAULT_CMD_TIMEOUT, TokioCommandRunner};
use crate::infra::config::YamlConfigStore;
use crate::infra::resolver::PipResolver;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Where configuration is read from and written to.
    pub config_store: YamlConfigStore,
    /// Configuration loaded at startup.
    pub config: NoopConfig,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or parsed.
    pub fn new(flags: &OutputFlags) -> Result<Self> {
        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        let config_store = YamlConfigStore;
        let config = config_store.load()?;

        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode,
            config_store,
            config,
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Agent runtime configured from `runtime.*`.
    #[must_use]
    pub fn runtime(&self) -> LocalAgentRuntime<TokioCommandRunner> {
        let runtime = &self.config.runtime;
        LocalAgentRuntime::new(
            TokioCommandRunner::new(Duration::from_secs(runtime.timeout_secs)),
            runtime.program.clone(),
            runtime.agents_dir.clone(),
        )
    }

    /// Dependency resolver configured from `package.resolver`.
    #[must_use]
    pub fn resolver(&self) -> PipResolver<TokioCommandRunner> {
        PipResolver::new(
            TokioCommandRunner::new(DEFAULT_CMD_TIMEOUT),
            self.config.package.resolver.clone(),
        )
    }
}
