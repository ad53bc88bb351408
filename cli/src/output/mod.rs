//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod reporter;
pub mod styles;

use std::path::Path;

use anyhow::Result;
use console::Term;
use noop_common::AgentKind;
use owo_colors::OwoColorize as _;
pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use reporter::{SilentReporter, TerminalReporter};
pub use styles::Styles;

use crate::domain::{Formatted, InvestigationReport, NoopConfig, PackageReport};

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let styles = if use_colors {
            Styles::colored()
        } else {
            Styles::default()
        };

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠` to stderr. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            eprintln!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print a section header. Suppressed when `quiet`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {:<28} {value}", key.style(self.styles.label));
        }
    }
}

/// Renderer selected from the output mode; every command prints through it.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        match self {
            Renderer::Human(r) => {
                r.render_version(version);
                Ok(())
            }
            Renderer::Json(r) => r.render_version(version),
        }
    }

    /// Render the closed agent set and where each agent lives.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_agents(&self, agents: &[AgentKind], agents_dir: &Path) -> Result<()> {
        match self {
            Renderer::Human(r) => {
                r.render_agents(agents, agents_dir);
                Ok(())
            }
            Renderer::Json(r) => r.render_agents(agents, agents_dir),
        }
    }

    /// Render an agent's answer, already formatted or raw.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_answer(&self, agent: AgentKind, exit_code: i32, answer: &str) -> Result<()> {
        match self {
            Renderer::Human(r) => {
                r.render_answer(answer);
                Ok(())
            }
            Renderer::Json(r) => r.render_answer(agent, exit_code, answer),
        }
    }

    /// Render the result of the standalone formatter.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_formatted(&self, formatted: &Formatted) -> Result<()> {
        match self {
            Renderer::Human(r) => {
                r.render_answer(&formatted.text);
                Ok(())
            }
            Renderer::Json(r) => r.render_formatted(formatted),
        }
    }

    /// Render a finished deployment package.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_package(&self, report: &PackageReport) -> Result<()> {
        match self {
            Renderer::Human(r) => {
                r.render_package(report);
                Ok(())
            }
            Renderer::Json(r) => r.render_package(report),
        }
    }

    /// Render an alarm investigation report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_report(&self, report: &InvestigationReport) -> Result<()> {
        match self {
            Renderer::Human(r) => {
                r.render_report(report);
                Ok(())
            }
            Renderer::Json(r) => r.render_report(report),
        }
    }

    /// Render the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &NoopConfig, path: &Path) -> Result<()> {
        match self {
            Renderer::Human(r) => {
                r.render_config(config, path);
                Ok(())
            }
            Renderer::Json(r) => r.render_config(config, path),
        }
    }

    /// Confirm a persisted setting.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config_set(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Renderer::Human(r) => {
                r.render_config_set(key, value);
                Ok(())
            }
            Renderer::Json(r) => r.render_config_set(key, value),
        }
    }
}
