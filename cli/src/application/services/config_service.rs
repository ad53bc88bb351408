//! Application service — show and change settings.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::{NoopConfig, apply_config_value};

/// Current settings together with the file they come from.
///
/// The file need not exist; defaults are reported in that case.
pub fn current(store: &impl ConfigStore) -> Result<(NoopConfig, PathBuf)> {
    Ok((store.load()?, store.path()?))
}

/// Validate `key = value` against the stored settings and persist the result.
///
/// Nothing is written when validation fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<NoopConfig> {
    let mut config = store.load()?;
    apply_config_value(&mut config, key, value)?;
    store.save(&config)?;
    Ok(config)
}
