//! Deployment package layout.
//!
//! Pure functions only — paths are computed, never touched.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::domain::config::PackageConfig;

/// Inputs and output of one package build. All paths are absolute or
/// relative to the process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    pub manifest: PathBuf,
    pub handler: PathBuf,
    pub output: PathBuf,
}

impl PackageSpec {
    /// Resolve the configured file names against the build directory.
    #[must_use]
    pub fn from_config(dir: &Path, config: &PackageConfig) -> Self {
        Self {
            manifest: dir.join(&config.manifest),
            handler: dir.join(&config.handler),
            output: dir.join(&config.output),
        }
    }

    /// Name the handler gets at the archive root.
    #[must_use]
    pub fn handler_file_name(&self) -> Option<&std::ffi::OsStr> {
        self.handler.file_name()
    }
}

/// Summary of a written archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveSummary {
    /// Number of file entries.
    pub files: usize,
    /// Archive size in bytes.
    pub bytes: u64,
    /// Base64 SHA-256 of the archive, the form Lambda reports as `CodeSha256`.
    pub sha256_base64: String,
}

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageReport {
    pub archive: PathBuf,
    #[serde(flatten)]
    pub summary: ArchiveSummary,
}

/// Archive entry name for `path` under `root`: relative, `/`-separated.
///
/// Returns `None` for the root itself or for paths outside it.
#[must_use]
pub fn archive_entry_name(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Option<_>>()?;
    (!parts.is_empty()).then(|| parts.join("/"))
}
