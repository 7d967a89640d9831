//! CLI layer - Command-line interface and interactive session

pub mod commands;
pub mod output;
pub mod session;

pub use commands::{Cli, Commands};
pub use output::format_entry_list;
pub use session::{Session, SessionCommand};
