//! Zip implementation of the `ArchiveWriter` port.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::application::ports::ArchiveWriter;
use crate::domain::{ArchiveSummary, archive_entry_name};
use crate::infra::fs::sha256_base64;

/// Writes deflate-compressed zip archives.
///
/// The archive is assembled in a temporary file next to the destination and
/// renamed into place only once complete, so a failed write leaves nothing at
/// the destination (and an older archive there survives).
pub struct ZipArchiveWriter;

impl ArchiveWriter for ZipArchiveWriter {
    fn write_archive(&self, source: &Path, dest: &Path) -> Result<ArchiveSummary> {
        let parent = match dest.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let partial = tempfile::Builder::new()
            .prefix(".noop-")
            .suffix(".zip.partial")
            .tempfile_in(parent)
            .with_context(|| format!("creating temporary archive in {}", parent.display()))?;

        let mut zip = ZipWriter::new(partial);
        let files = add_tree(&mut zip, source)?;
        let partial = zip.finish().context("finalising zip archive")?;
        partial
            .as_file()
            .sync_all()
            .context("flushing zip archive")?;

        let bytes = partial
            .as_file()
            .metadata()
            .context("reading archive size")?
            .len();
        let sha256_base64 = sha256_base64(partial.path())?;

        partial
            .persist(dest)
            .map_err(|e| e.error)
            .with_context(|| format!("moving archive into place at {}", dest.display()))?;
        debug!(dest = %dest.display(), files, bytes, "archive written");

        Ok(ArchiveSummary {
            files,
            bytes,
            sha256_base64,
        })
    }
}

/// Add every file under `root` in a stable order; returns the file count.
fn add_tree<W: std::io::Write + std::io::Seek>(
    zip: &mut ZipWriter<W>,
    root: &Path,
) -> Result<usize> {
    let mut files = 0;
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", root.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = archive_entry_name(root, path) else {
            continue;
        };

        zip.start_file(name, file_options(path)?)
            .with_context(|| format!("adding {}", path.display()))?;
        let mut f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        std::io::copy(&mut f, zip).with_context(|| format!("compressing {}", path.display()))?;
        files += 1;
    }
    Ok(files)
}

fn file_options(path: &Path) -> Result<SimpleFileOptions> {
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(path)
            .with_context(|| format!("reading permissions of {}", path.display()))?
            .permissions()
            .mode();
        options.unix_permissions(mode & 0o777)
    };
    #[cfg(not(unix))]
    let _ = path;
    Ok(options)
}
