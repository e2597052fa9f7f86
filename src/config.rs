//! Configuration for FormStore
//!
//! Centralized configuration with sensible defaults.

use std::env;
use std::path::PathBuf;

use crate::error::{FormStoreError, Result};

/// Environment variable that overrides the record file location
pub const DATA_FILE_ENV: &str = "FORMSTORE_DATA_FILE";

/// Main configuration for a RecordStore instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the JSON record file. Its parent directory is created on the
    /// first append if missing.
    pub data_file: PathBuf,

    /// Write indented JSON
    pub pretty: bool,

    /// fsync the temporary file before renaming it over the record file
    pub sync_on_write: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./formstore_data/form_data.json"),
            pretty: true,
            sync_on_write: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Default config, with the data file taken from `FORMSTORE_DATA_FILE`
    /// when that variable is set.
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Some(value) = env::var_os(DATA_FILE_ENV) {
            if value.is_empty() {
                return Err(FormStoreError::Config(format!("{} is set but empty", DATA_FILE_ENV)));
            }
            config.data_file = PathBuf::from(value);
        }

        Ok(config)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the record file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Toggle indented output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    /// Toggle fsync before the rename
    pub fn sync_on_write(mut self, sync: bool) -> Self {
        self.config.sync_on_write = sync;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
