//! Command implementations

pub mod agents;
pub mod config;
pub mod format;
pub mod investigate;
pub mod invoke;
pub mod package;
pub mod version;

use std::io::Read as _;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

/// Read `path`, or all of stdin when no path is given. Invalid UTF-8 is
/// replaced, never rejected.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("cannot read stdin")?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Map a child exit status onto our own; codes outside `0..=255` become 1.
pub(crate) fn exit_code_from(code: i32) -> ExitCode {
    match u8::try_from(code) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    }
}
