//! Configuration management

use crate::domain::AliasTable;
use crate::error::{Result, ZkError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory marking a notebook root
pub const NOTEBOOK_MARKER: &str = ".zk";

/// Overrides the directory holding the user-global `config.toml`
pub const CONFIG_DIR_ENV: &str = "ZK_CONFIG_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub note: NoteConfig,
    #[serde(default, skip_serializing_if = "AliasTable::is_empty")]
    pub alias: AliasTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteConfig {
    /// Extension of the files treated as notes
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for NoteConfig {
    fn default() -> Self {
        NoteConfig {
            extension: default_extension(),
        }
    }
}

fn default_extension() -> String {
    "md".to_string()
}

impl Config {
    /// Load config from .zk/config.toml in the given notebook root
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(NOTEBOOK_MARKER).join("config.toml");
        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ZkError::NotebookNotFound(path.to_path_buf())
            } else {
                ZkError::Io(e)
            }
        })?;

        Self::parse(&contents, &config_path)
    }

    /// Save config to .zk/config.toml in the given notebook root
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let zk_dir = path.join(NOTEBOOK_MARKER);
        if !zk_dir.exists() {
            fs::create_dir(&zk_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(zk_dir.join("config.toml"), contents)?;
        Ok(())
    }

    /// Load the user-global config. A missing file yields the defaults.
    pub fn load_global() -> Result<Self> {
        let Some(path) = Self::global_path() else {
            tracing::debug!("no user config directory, using defaults");
            return Ok(Config::default());
        };

        match fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loaded user config");
                Self::parse(&contents, &path)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(ZkError::Io(e)),
        }
    }

    /// Location of the user-global config file
    pub fn global_path() -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Some(PathBuf::from(dir).join("config.toml"));
        }
        directories::BaseDirs::new().map(|dirs| dirs.config_dir().join("zk").join("config.toml"))
    }

    fn parse(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| ZkError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }
}
