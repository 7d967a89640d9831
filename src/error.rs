//! Error types for jotbook
//!
//! Store intents never fail; these errors come from the boundary around it
//! (configuration, logging and the interactive session).

use thiserror::Error;

/// Main error type for jotbook application
#[derive(Debug, Error)]
pub enum JotbookError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No entry number {0} in the current list")]
    NoSuchEntry(usize),

    #[error("Nothing to save: title and body are empty")]
    NothingToSave,

    #[error("No journal is open for editing")]
    NoOpenDraft,

    #[error("'{command}' is not available {reason}")]
    NotAvailable {
        command: String,
        reason: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JotbookError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JotbookError::Config(_) | JotbookError::TomlSerialize(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JotbookError::UnknownCommand(cmd) => {
                format!(
                    "Unknown command: '{}'\n\n\
                    Type 'help' to see the available commands.",
                    cmd
                )
            }
            JotbookError::NoSuchEntry(n) => {
                format!(
                    "No entry number {} in the current list\n\n\
                    Suggestions:\n\
                    • Run 'list' to see entry numbers\n\
                    • Clear the search with 'search' if entries are hidden",
                    n
                )
            }
            JotbookError::NothingToSave => {
                "Nothing to save: title and body are empty\n\n\
                Set some content first, e.g. 'title Great Day' or 'body Walked and relaxed.'"
                    .to_string()
            }
            JotbookError::NoOpenDraft => {
                "No journal is open for editing\n\n\
                Start one with 'new' or open an existing one with 'open <n>'."
                    .to_string()
            }
            JotbookError::Config(msg) => {
                if msg.contains("Invalid sort mode") {
                    format!(
                        "{}\n\n\
                        Example: jotbook config sort bookmark",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JotbookError
pub type Result<T> = std::result::Result<T, JotbookError>;
