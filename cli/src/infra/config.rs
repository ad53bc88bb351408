//! YAML file implementation of the `ConfigStore` port.
//!
//! The file lives at `$NOOP_CONFIG` when set and non-empty, otherwise at
//! `~/.noop/config.yaml`. A missing file means defaults.

use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::NoopConfig;

pub struct YamlConfigStore;

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<NoopConfig> {
        let path = self.path()?;
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(NoopConfig::default());
            }
            Err(e) => return Err(e).with_context(|| format!("cannot read {}", path.display())),
        };
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }

    /// Writes a sibling temp file with mode 0600, then renames it over the
    /// config, so readers see either the old file or the new one.
    fn save(&self, config: &NoopConfig) -> Result<()> {
        let path = self.path()?;
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;

        let content = serde_yaml::to_string(config).context("cannot serialize config")?;
        let mut file = tempfile::Builder::new()
            .prefix(".config-")
            .tempfile_in(&parent)
            .with_context(|| format!("cannot write {}", path.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("cannot set permissions on {}", path.display()))?;
        }
        file.write_all(content.as_bytes())
            .with_context(|| format!("cannot write {}", path.display()))?;
        file.persist(&path)
            .with_context(|| format!("cannot replace {}", path.display()))?;
        Ok(())
    }

    fn path(&self) -> Result<PathBuf> {
        match std::env::var_os("NOOP_CONFIG") {
            Some(val) if !val.is_empty() => Ok(PathBuf::from(val)),
            _ => dirs::home_dir()
                .map(|home| home.join(".noop").join("config.yaml"))
                .context("cannot determine home directory"),
        }
    }
}
