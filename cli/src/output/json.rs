//! JSON output helpers.
//!
//! `JsonRenderer` prints one pretty-printed object per command on stdout.
//! `format_error` builds the error object every `--json` path emits on failure.

use std::path::Path;

use anyhow::{Context, Result};
use noop_common::AgentKind;
use serde_json::json;

use crate::domain::{
    AlarmEventError, ConfigError, Formatted, InvestigationReport, InvokeError, NoopConfig,
    PackageReport, PackagingError,
};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Stable machine-readable code for the first typed error in `err`'s chain.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<InvokeError>() {
            return e.code();
        }
        if cause.is::<PackagingError>() {
            return "PACKAGING";
        }
        if cause.is::<ConfigError>() {
            return "CONFIG";
        }
        if cause.is::<AlarmEventError>() {
            return "INVALID_EVENT";
        }
    }
    "ERROR"
}

/// Renders domain types as JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    fn print(value: &serde_json::Value) -> Result<()> {
        println!(
            "{}",
            serde_json::to_string_pretty(value).context("JSON serialization failed")?
        );
        Ok(())
    }

    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        Self::print(&json!({ "version": version }))
    }

    /// Render the agent set.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_agents(&self, agents: &[AgentKind], agents_dir: &Path) -> Result<()> {
        let agents: Vec<_> = agents
            .iter()
            .map(|a| {
                let dir = agents_dir.join(a.dir_name());
                json!({
                    "name": a.as_str(),
                    "description": a.description(),
                    "directory": dir.display().to_string(),
                    "present": dir.is_dir(),
                })
            })
            .collect();
        Self::print(&json!({ "agents": agents }))
    }

    /// Render an invocation result.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_answer(&self, agent: AgentKind, exit_code: i32, answer: &str) -> Result<()> {
        Self::print(&json!({
            "agent": agent,
            "exit_code": exit_code,
            "output": answer,
        }))
    }

    /// Render a standalone formatter result.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_formatted(&self, formatted: &Formatted) -> Result<()> {
        Self::print(&json!({
            "kind": formatted.kind,
            "output": formatted.text,
        }))
    }

    /// Render a package report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_package(&self, report: &PackageReport) -> Result<()> {
        Self::print(&serde_json::to_value(report).context("JSON serialization failed")?)
    }

    /// Render an investigation report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_report(&self, report: &InvestigationReport) -> Result<()> {
        Self::print(&serde_json::to_value(report).context("JSON serialization failed")?)
    }

    /// Render the configuration with its source path.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &NoopConfig, path: &Path) -> Result<()> {
        Self::print(&json!({
            "path": path.display().to_string(),
            "config": config,
        }))
    }

    /// Confirm a persisted setting.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config_set(&self, key: &str, value: &str) -> Result<()> {
        Self::print(&json!({ "key": key, "value": value, "saved": true }))
    }
}
