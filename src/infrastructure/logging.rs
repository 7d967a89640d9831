//! Logging bootstrap
//!
//! Records go to stderr so they never mix with session output on stdout.
//! An explicit `--log-level` wins; otherwise `RUST_LOG` takes precedence
//! over the configured level.

use crate::error::{JotbookError, Result};
use flexi_logger::{Logger, LoggerHandle};
use log::info;

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Normalize a level name, rejecting unknown ones
pub fn normalize_level(level: &str) -> Result<&'static str> {
    let wanted = level.trim().to_lowercase();
    LEVELS
        .iter()
        .find(|candidate| **candidate == wanted)
        .copied()
        .ok_or_else(|| {
            JotbookError::Config(format!(
                "Invalid log level: '{}'. Valid levels are: {}",
                level,
                LEVELS.join(", ")
            ))
        })
}

/// Start the logger; keep the returned handle alive for the process lifetime.
///
/// `explicit` comes from the command line and ignores `RUST_LOG`; `fallback`
/// is the configured level and only applies when `RUST_LOG` is unset.
pub fn init_logging(explicit: Option<&str>, fallback: &str) -> Result<LoggerHandle> {
    let (logger, level) = match explicit {
        Some(level) => {
            let level = normalize_level(level)?;
            (Logger::try_with_str(level)?, level)
        }
        None => {
            let level = normalize_level(fallback)?;
            (Logger::try_with_env_or_str(level)?, level)
        }
    };
    let handle = logger.log_to_stderr().start()?;

    info!(
        "event=app_start version={} level={}",
        env!("CARGO_PKG_VERSION"),
        level
    );
    Ok(handle)
}
