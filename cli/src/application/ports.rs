//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `noop_common` — never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::Result;
use noop_common::InvocationRequest;

use crate::domain::{ArchiveSummary, InvokeError, NoopConfig};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds the
    /// runner's timeout. On timeout the child must be killed.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a program with `dir` as its working directory.
    ///
    /// # Errors
    ///
    /// Same as [`CommandRunner::run`].
    async fn run_in_dir(&self, program: &str, args: &[&str], dir: &Path) -> Result<Output>;
}

// ── Agent Runtime Port ────────────────────────────────────────────────────────

/// Raw result of one runtime call: exit code plus captured streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeOutput {
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl RuntimeOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    #[must_use]
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }
}

/// Capability to run a prompt against an agent.
///
/// A non-zero exit from the runtime is a valid [`RuntimeOutput`]; only
/// failing to obtain an answer at all is an error.
#[allow(async_fn_in_trait)]
pub trait AgentRuntime {
    /// Invoke the agent named in `request` and wait for it to finish.
    ///
    /// # Errors
    ///
    /// Returns `InvokeError::RuntimeInvocation` if the runtime cannot be
    /// started, times out, or is terminated without an exit code.
    async fn invoke(&self, request: &InvocationRequest) -> Result<RuntimeOutput, InvokeError>;
}

// ── Packaging Ports ───────────────────────────────────────────────────────────

/// Materialises third-party dependencies listed in a manifest.
#[allow(async_fn_in_trait)]
pub trait DependencyResolver {
    /// Install everything `manifest` lists into `target`, flat.
    ///
    /// # Errors
    ///
    /// Returns an error if resolution fails for any dependency.
    async fn resolve(&self, manifest: &Path, target: &Path) -> Result<()>;
}

/// Compresses a directory tree into a single archive file.
pub trait ArchiveWriter {
    /// Archive every file under `source` into `dest`.
    ///
    /// Implementations must leave nothing at `dest` when they fail.
    ///
    /// # Errors
    ///
    /// Returns an error if reading `source` or writing `dest` fails.
    fn write_archive(&self, source: &Path, dest: &Path) -> Result<ArchiveSummary>;
}

/// Local filesystem operations used by the package builder.
pub trait LocalFs {
    fn exists(&self, path: &Path) -> bool;

    /// Copy a single file, returning the number of bytes copied.
    ///
    /// # Errors
    ///
    /// Returns an error if the copy fails.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<u64>;

    /// Create a fresh, empty staging directory.
    ///
    /// Returns `(path, guard)`; the directory is removed when `guard` is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn staging_dir(&self) -> Result<(PathBuf, Box<dyn std::any::Any>)>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load the configuration, returning defaults when none is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if stored configuration exists but cannot be read.
    fn load(&self) -> Result<NoopConfig>;

    /// Persist the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be written.
    fn save(&self, config: &NoopConfig) -> Result<()>;

    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
