//! JSON config file adapter.
//!
//! Implements [`ConfigPort`] over a single JSON file.  Values are
//! range-checked on load and before every save; a missing file means
//! first run and yields the defaults.

use std::fs;
use std::io;
use std::path::PathBuf;

use log::info;

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::SystemConfig;

pub struct JsonConfigFile {
    path: PathBuf,
}

impl JsonConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<SystemConfig, ConfigError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("Config: {} not found, using defaults", self.path.display());
                return Ok(SystemConfig::default());
            }
            Err(e) => return Err(ConfigError::IoError(e.kind())),
        };

        let config: SystemConfig =
            serde_json::from_str(&raw).map_err(|_| ConfigError::Corrupted)?;
        config.validate()?;
        info!("Config: loaded {}", self.path.display());
        Ok(config)
    }

    fn save(&self, config: &SystemConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config).map_err(|_| ConfigError::Corrupted)?;

        // Write-then-rename: the config file is never half-written.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| ConfigError::IoError(e.kind()))?;
        fs::rename(&tmp, &self.path).map_err(|e| ConfigError::IoError(e.kind()))?;
        info!("Config: saved {}", self.path.display());
        Ok(())
    }
}
