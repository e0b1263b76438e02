use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{RegistryError, Result};

/// Registry file used when nothing else is configured, relative to the working directory.
pub const DEFAULT_REGISTRY_FILE: &str = "dlg_registry.dat";

pub const REGISTRY_FILE_ENV: &str = "DLG_REGISTRY_FILE";

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_file: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(config_path).map_err(|e| RegistryError::ConfigRead {
                path: config_path.to_path_buf(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| RegistryError::ConfigParse {
            path: config_path.to_path_buf(),
            source: e,
        })
    }

    /// Load for the register flow, which must not stop on a bad config: any
    /// error is logged and the defaults are used instead.
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => {
                warn!(error = %e, "ignoring config");
                Config::default()
            }
        }
    }

    pub fn load_from_or_default(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring config");
            Config::default()
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "dlg-register")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(RegistryError::NoConfigDir)
    }

    /// Get the registry path, preferring the explicit flag, then the env var,
    /// then the config file.
    pub fn registry_path(&self, explicit: Option<&Path>) -> PathBuf {
        let from_env = std::env::var_os(REGISTRY_FILE_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.resolve_registry_path(explicit, from_env)
    }

    fn resolve_registry_path(&self, explicit: Option<&Path>, from_env: Option<PathBuf>) -> PathBuf {
        let path = explicit
            .map(Path::to_path_buf)
            .or(from_env)
            .or_else(|| self.registry_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REGISTRY_FILE));
        debug!(path = %path.display(), "resolved registry file");
        path
    }
}
