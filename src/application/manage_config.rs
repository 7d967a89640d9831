//! Config management use case

use crate::domain::SortMode;
use crate::error::{JotbookError, Result};
use crate::infrastructure::{normalize_level, Config};
use log::info;
use std::path::PathBuf;
use std::str::FromStr;

const VALID_KEYS: &str = "samples, sort, log_level";

/// Service for reading and editing config.toml
pub struct ConfigService {
    dir: PathBuf,
}

impl ConfigService {
    /// Create a config service for the given config directory
    pub fn new(dir: PathBuf) -> Self {
        ConfigService { dir }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.dir)?;

        match key {
            "samples" => Ok(config.samples.to_string()),
            "sort" => Ok(config.sort.to_string()),
            "log_level" => Ok(config.log_level),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.dir)?;

        match key {
            "samples" => {
                config.samples = value.trim().parse::<bool>().map_err(|_| {
                    JotbookError::Config(format!(
                        "Invalid value for samples: '{}'. Expected true or false",
                        value
                    ))
                })?;
            }
            "sort" => {
                config.sort = SortMode::from_str(value).map_err(JotbookError::Config)?;
            }
            "log_level" => {
                config.log_level = normalize_level(value)?.to_string();
            }
            _ => return Err(unknown_key(key)),
        }

        config.save_to_dir(&self.dir)?;
        info!("event=config_set key={} value={}", key, value.trim());
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.dir)
    }
}

fn unknown_key(key: &str) -> JotbookError {
    JotbookError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}
