//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jotbook")]
#[command(about = "In-memory journal with search, bookmarks and sorting", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start with no entries
    #[arg(long, conflicts_with = "samples")]
    pub empty: bool,

    /// Start with the sample entries
    #[arg(long)]
    pub samples: bool,

    /// Initial sort mode (date, bookmark)
    #[arg(long, value_name = "MODE")]
    pub sort: Option<String>,

    /// Log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
