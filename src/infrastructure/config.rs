//! Vault-local configuration

use crate::error::{Result, VaultexError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional defaults read from `.vaultex.toml` at the vault root.
///
/// CLI flags always win over config values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default destination directory for archives. Relative paths resolve
    /// against the vault root.
    pub output: Option<PathBuf>,

    /// Follow wiki-links by default.
    #[serde(default)]
    pub recursive: bool,
}

impl Config {
    /// Load config from `.vaultex.toml` in the given directory.
    ///
    /// A missing file yields the defaults; a malformed file is a fatal
    /// configuration error.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".vaultex.toml");

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Config::default());
            }
            Err(e) => return Err(VaultexError::Io(e)),
        };

        toml::from_str(&contents).map_err(|e| {
            VaultexError::Config(format!("Failed to parse .vaultex.toml: {}", e))
        })
    }

    /// Resolve the configured output directory against the vault root.
    pub fn output_for(&self, root: &Path) -> Option<PathBuf> {
        self.output.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                root.join(p)
            }
        })
    }
}
