//! Configuration management

use crate::domain::SortMode;
use crate::error::{JotbookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding config.toml, relative to the working directory
pub const CONFIG_DIR: &str = ".jotbook";
pub const CONFIG_FILE: &str = "config.toml";
/// Overrides the config directory when set
pub const HOME_ENV: &str = "JOTBOOK_HOME";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Seed the sample entries at startup
    #[serde(default = "default_samples")]
    pub samples: bool,
    /// Initial sort mode of the entry list
    #[serde(default)]
    pub sort: SortMode,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_samples() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            samples: default_samples(),
            sort: SortMode::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Directory the config lives in: `$JOTBOOK_HOME`, else `./.jotbook`
    pub fn discover_dir() -> Result<PathBuf> {
        if let Ok(home) = std::env::var(HOME_ENV) {
            return Ok(PathBuf::from(home));
        }
        Ok(std::env::current_dir()?.join(CONFIG_DIR))
    }

    /// Load config.toml from the given directory, or defaults if it is missing
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(JotbookError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| JotbookError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config.toml into the given directory, creating it if needed
    pub fn save_to_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }
}
