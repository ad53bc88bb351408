//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use noop_common::AgentKind;
use thiserror::Error;

// ── Invocation errors ─────────────────────────────────────────────────────────

/// Errors raised while validating or dispatching an agent invocation.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("Usage: noop invoke <agent-name> <prompt> ({0})")]
    Usage(&'static str),

    #[error("Unknown agent '{name}'. Valid agents: {valid}")]
    UnknownAgent { name: String, valid: String },

    #[error("Agent '{agent}' runtime invocation failed: {reason}")]
    RuntimeInvocation { agent: AgentKind, reason: String },
}

impl InvokeError {
    /// Stable machine-readable code used in `--json` error objects.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            InvokeError::Usage(_) => "USAGE",
            InvokeError::UnknownAgent { .. } => "UNKNOWN_AGENT",
            InvokeError::RuntimeInvocation { .. } => "RUNTIME_INVOCATION",
        }
    }
}

// ── Packaging errors ──────────────────────────────────────────────────────────

/// Errors raised while building a deployment package.
#[derive(Debug, Error)]
pub enum PackagingError {
    #[error("Missing package input: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Cannot prepare staging directory: {0}")]
    Staging(String),

    #[error("Dependency resolution failed: {0}")]
    Resolution(String),

    #[error("Cannot write archive {}: {reason}", path.display())]
    Archive { path: PathBuf, reason: String },

    #[error("Packaging interrupted by {0}; staging directory removed")]
    Interrupted(&'static str),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nExpected: {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
}

// ── Alarm event errors ────────────────────────────────────────────────────────

/// The input was not a CloudWatch alarm event.
#[derive(Debug, Error)]
#[error("Invalid alarm event: {0}")]
pub struct AlarmEventError(pub String);
