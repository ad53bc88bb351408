//! `pip`-compatible implementation of the `DependencyResolver` port.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::{CommandRunner, DependencyResolver};

/// Installs a requirements file into a target directory with
/// `<program> install -r <manifest> -t <target>`.
pub struct PipResolver<R: CommandRunner> {
    runner: R,
    program: String,
}

impl<R: CommandRunner> PipResolver<R> {
    #[must_use]
    pub fn new(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }
}

impl<R: CommandRunner> DependencyResolver for PipResolver<R> {
    async fn resolve(&self, manifest: &Path, target: &Path) -> Result<()> {
        let manifest = manifest.to_string_lossy();
        let target = target.to_string_lossy();
        let args = [
            "install",
            "--quiet",
            "--disable-pip-version-check",
            "-r",
            manifest.as_ref(),
            "-t",
            target.as_ref(),
        ];
        debug!(program = %self.program, ?args, "resolving dependencies");

        let output = self
            .runner
            .run(&self.program, &args)
            .await
            .with_context(|| format!("running {}", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            );
        }
        Ok(())
    }
}
