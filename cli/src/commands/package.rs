//! `noop package` — build the Lambda deployment package.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::package_builder::build_package;
use crate::domain::{PackageSpec, PackagingError};
use crate::infra::archive::ZipArchiveWriter;
use crate::infra::fs::OsFs;
use crate::infra::signal::until_shutdown;
use crate::output::{SilentReporter, TerminalReporter};

/// Arguments for the package command.
#[derive(Args)]
pub struct PackageArgs {
    /// Directory holding the manifest and handler
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Dependency manifest (default from `package.manifest`)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Handler source placed at the archive root (default from `package.handler`)
    #[arg(long)]
    pub handler: Option<PathBuf>,

    /// Archive to write (default from `package.output`)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl PackageArgs {
    /// Relative paths, from flags or config, are taken relative to `--dir`.
    fn spec(self, app: &AppContext) -> PackageSpec {
        let mut spec = PackageSpec::from_config(&self.dir, &app.config.package);
        if let Some(manifest) = self.manifest {
            spec.manifest = self.dir.join(manifest);
        }
        if let Some(handler) = self.handler {
            spec.handler = self.dir.join(handler);
        }
        if let Some(output) = self.output {
            spec.output = self.dir.join(output);
        }
        spec
    }
}

/// Run the package command.
///
/// # Errors
///
/// Returns a `PackagingError` if an input is missing, dependency resolution
/// fails, the archive cannot be written, or SIGINT/SIGTERM arrives first.
pub async fn run(app: &AppContext, args: PackageArgs) -> Result<ExitCode> {
    let spec = args.spec(app);
    let resolver = app.resolver();

    let report = if app.is_json() {
        until_shutdown(
            build_package(&OsFs, &resolver, &ZipArchiveWriter, &SilentReporter, &spec),
            PackagingError::Interrupted,
        )
        .await?
    } else {
        let reporter = TerminalReporter::new(&app.output);
        until_shutdown(
            build_package(&OsFs, &resolver, &ZipArchiveWriter, &reporter, &spec),
            PackagingError::Interrupted,
        )
        .await?
    };

    app.renderer().render_package(&report)?;
    Ok(ExitCode::SUCCESS)
}
