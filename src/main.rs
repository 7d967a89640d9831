use chrono::Utc;
use clap::Parser;
use jotbook::application::{ConfigService, EntryStore};
use jotbook::cli::{Cli, Commands, Session};
use jotbook::domain::SortMode;
use jotbook::error::{JotbookError, Result};
use jotbook::infrastructure::{init_logging, Config};
use std::io;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_dir = Config::discover_dir()?;

    match cli.command {
        Some(Commands::Config { key, value, list }) => {
            // The config file may be the thing being repaired, so don't read it here
            let _logger = init_logging(cli.log_level.as_deref(), &Config::default().log_level)?;
            let service = ConfigService::new(config_dir);

            if list {
                let config = service.list()?;
                println!("samples = {}", config.samples);
                println!("sort = {}", config.sort);
                println!("log_level = {}", config.log_level);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: jotbook config [--list | <key> [<value>]]");
                println!("Valid keys: samples, sort, log_level");
                Ok(())
            }
        }
        None => {
            let config = Config::load_from_dir(&config_dir)?;

            let _logger = init_logging(cli.log_level.as_deref(), &config.log_level)?;

            let sort = match cli.sort.as_deref() {
                Some(s) => SortMode::from_str(s).map_err(JotbookError::Config)?,
                None => config.sort,
            };
            let samples = if cli.empty {
                false
            } else {
                cli.samples || config.samples
            };

            let mut store = if samples {
                EntryStore::with_samples(Utc::now())
            } else {
                EntryStore::new()
            };
            store.set_sort_mode(sort);

            let stdin = io::stdin();
            let mut session = Session::new(store, io::stdout().lock());
            session.run(stdin.lock())
        }
    }
}
