//! Infrastructure layer - Configuration file and logging backend

pub mod config;
pub mod logging;

pub use config::Config;
pub use logging::{init_logging, normalize_level};
