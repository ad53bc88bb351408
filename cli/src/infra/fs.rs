//! Filesystem infrastructure — implements `LocalFs` and file hashing.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64::Engine as _;
use sha2::{Digest, Sha256};

use crate::application::ports::LocalFs;

/// Production filesystem implementation of `LocalFs`.
pub struct OsFs;

impl LocalFs for OsFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<u64> {
        std::fs::copy(from, to)
            .with_context(|| format!("copying {} to {}", from.display(), to.display()))
    }

    fn staging_dir(&self) -> Result<(PathBuf, Box<dyn std::any::Any>)> {
        let dir = tempfile::Builder::new()
            .prefix("noop-package-")
            .tempdir()
            .context("creating staging directory")?;
        Ok((dir.path().to_path_buf(), Box::new(dir)))
    }
}

/// Compute the SHA-256 digest of a file.
///
/// Reads the file in 64 KB chunks to avoid loading large files into memory.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn sha256_file(path: &Path) -> Result<[u8; 32]> {
    let mut file =
        std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; 65536];
    loop {
        let n = file.read(&mut buf).context("reading file")?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    Ok(digest)
}

/// Base64 SHA-256 of a file, as Lambda reports `CodeSha256` and Terraform
/// computes `filebase64sha256`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn sha256_base64(path: &Path) -> Result<String> {
    Ok(base64::engine::general_purpose::STANDARD.encode(sha256_file(path)?))
}
