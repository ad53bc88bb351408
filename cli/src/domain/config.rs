//! Domain types and validators for noop configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::investigation::DEFAULT_THEME_COLOR;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &[
    "runtime.program",
    "runtime.agents_dir",
    "runtime.timeout_secs",
    "package.manifest",
    "package.handler",
    "package.output",
    "package.resolver",
    "investigation.theme_color",
];

/// Longest accepted agent runtime timeout (one hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.noop/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NoopConfig {
    pub runtime: RuntimeConfig,
    pub package: PackageConfig,
    pub investigation: InvestigationConfig,
}

/// How agents are reached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Agent runtime CLI, invoked as `<program> invoke <payload>`.
    pub program: String,
    /// Directory holding one project directory per agent.
    pub agents_dir: String,
    /// Upper bound on a single invocation.
    pub timeout_secs: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            program: "agentcore".to_string(),
            agents_dir: "agents".to_string(),
            timeout_secs: 900,
        }
    }
}

/// Deployment package inputs and output, relative to the build directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PackageConfig {
    pub manifest: String,
    pub handler: String,
    pub output: String,
    /// Installer used to materialise dependencies (`<resolver> install -r ... -t ...`).
    pub resolver: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            manifest: "requirements.txt".to_string(),
            handler: "lambda_function.py".to_string(),
            output: "lambda.zip".to_string(),
            resolver: "pip".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InvestigationConfig {
    pub theme_color: String,
}

impl Default for InvestigationConfig {
    fn default() -> Self {
        Self {
            theme_color: DEFAULT_THEME_COLOR.to_string(),
        }
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let invalid = |expected: &str| -> Result<()> {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
        .into())
    };

    match key {
        "runtime.timeout_secs" => match value.parse::<u64>() {
            Ok(secs) if (1..=MAX_TIMEOUT_SECS).contains(&secs) => Ok(()),
            _ => invalid(&format!("whole number of seconds between 1 and {MAX_TIMEOUT_SECS}")),
        },
        "investigation.theme_color" => {
            let hex = value.strip_prefix('#').unwrap_or("");
            if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
                Ok(())
            } else {
                invalid("hex colour such as #6d28d9")
            }
        }
        _ if value.trim().is_empty() => invalid("non-empty value"),
        _ => Ok(()),
    }
}

/// Apply a validated key/value pair to `config`.
///
/// # Errors
///
/// Returns an error if the key or value fails validation.
pub fn apply_config_value(config: &mut NoopConfig, key: &str, value: &str) -> Result<()> {
    validate_config_key(key)?;
    validate_config_value(key, value)?;

    let value = value.to_string();
    match key {
        "runtime.program" => config.runtime.program = value,
        "runtime.agents_dir" => config.runtime.agents_dir = value,
        "runtime.timeout_secs" => config.runtime.timeout_secs = value.parse()?,
        "package.manifest" => config.package.manifest = value,
        "package.handler" => config.package.handler = value,
        "package.output" => config.package.output = value,
        "package.resolver" => config.package.resolver = value,
        "investigation.theme_color" => config.investigation.theme_color = value,
        _ => anyhow::bail!("Unknown setting: {key}"),
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
