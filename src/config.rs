//! Optional on-disk configuration, persisted as `config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::core::{CineClient, CineError};

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "CINEPULSE_DATA_DIR";

/// Data directory used when nothing else names one.
pub const DEFAULT_DATA_DIR: &str = ".cinepulse";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

/// Catalog endpoints. Unset fields keep the client defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub films_base: Option<Url>,
    pub quotes_base: Option<Url>,
    pub user_agent: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CineError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_required(path)
    }

    /// Loads a config file the user named explicitly. A missing file is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_required(path: &Path) -> Result<Self, CineError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Resolves the data directory: explicit flag, then `CINEPULSE_DATA_DIR`,
    /// then `[storage] data_dir`, then `./.cinepulse`.
    pub fn data_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
            .or_else(|| self.storage.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    /// Builds a client from the `[api]` section.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn client(&self) -> Result<CineClient, CineError> {
        let mut b = CineClient::builder();
        if let Some(u) = &self.api.films_base {
            b = b.base_films(u.clone());
        }
        if let Some(u) = &self.api.quotes_base {
            b = b.base_quotes(u.clone());
        }
        if let Some(ua) = &self.api.user_agent {
            b = b.user_agent(ua.clone());
        }
        b.build()
    }
}
