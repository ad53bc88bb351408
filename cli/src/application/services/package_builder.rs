//! Application service — build a deployment package.
//!
//! Stages dependencies and the handler in a scratch directory, archives the
//! tree, and always removes the scratch directory before returning.

use tracing::{debug, info};

use crate::application::ports::{ArchiveWriter, DependencyResolver, LocalFs, ProgressReporter};
use crate::domain::{ArchiveSummary, PackageReport, PackageSpec, PackagingError};

/// Build the archive described by `spec`.
///
/// Steps:
/// 1. Check that the manifest and handler exist
/// 2. Create a staging directory
/// 3. Resolve dependencies into it
/// 4. Copy the handler to its root
/// 5. Archive the staging tree to `spec.output`
///
/// The staging directory is gone when this returns, on every path. A failure
/// in steps 1–4 never touches `spec.output`; the archive writer guarantees
/// the same for step 5.
///
/// # Errors
///
/// Returns a `PackagingError` naming the step that failed.
pub async fn build_package(
    fs: &impl LocalFs,
    resolver: &impl DependencyResolver,
    archiver: &impl ArchiveWriter,
    reporter: &impl ProgressReporter,
    spec: &PackageSpec,
) -> Result<PackageReport, PackagingError> {
    for input in [&spec.manifest, &spec.handler] {
        if !fs.exists(input) {
            return Err(PackagingError::MissingInput(input.clone()));
        }
    }
    let handler_name = spec
        .handler_file_name()
        .ok_or_else(|| PackagingError::MissingInput(spec.handler.clone()))?;

    if fs.exists(&spec.output) {
        reporter.warn(&format!("replacing existing {}", spec.output.display()));
    }

    let (staging, guard) = fs
        .staging_dir()
        .map_err(|e| PackagingError::Staging(format!("{e:#}")))?;
    debug!(staging = %staging.display(), "created staging directory");

    let result: Result<ArchiveSummary, PackagingError> = async {
        reporter.step(&format!("resolving dependencies from {}...", spec.manifest.display()));
        resolver
            .resolve(&spec.manifest, &staging)
            .await
            .map_err(|e| PackagingError::Resolution(format!("{e:#}")))?;

        fs.copy_file(&spec.handler, &staging.join(handler_name))
            .map_err(|e| PackagingError::Staging(format!("{e:#}")))?;

        reporter.step(&format!("writing {}...", spec.output.display()));
        archiver
            .write_archive(&staging, &spec.output)
            .map_err(|e| PackagingError::Archive {
                path: spec.output.clone(),
                reason: format!("{e:#}"),
            })
    }
    .await;

    drop(guard);
    let summary = result?;
    info!(
        archive = %spec.output.display(),
        files = summary.files,
        bytes = summary.bytes,
        "deployment package written"
    );

    Ok(PackageReport {
        archive: spec.output.clone(),
        summary,
    })
}
