use std::fs::{self, File};
use std::path::PathBuf;

use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::Result;
use crate::types::FilterState;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// JSON file with an array of products (defaults to the built-in catalogue)
    #[arg(long, value_name = "PATH")]
    pub products: Option<PathBuf>,
    /// Initial search text
    #[arg(long, default_value = "")]
    pub filter: String,
    /// Start with "only show products in stock" checked
    #[arg(long)]
    pub in_stock_only: bool,
    /// Print the visible rows as JSON instead of starting the TUI
    #[arg(long)]
    pub json: bool,
    /// Where to write the log (defaults to the user data directory)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn initial_filter(&self) -> FilterState {
        FilterState {
            filter_text: self.filter.clone(),
            in_stock_only: self.in_stock_only,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Default log location: <data dir>/shelfscan/shelfscan.log, or the working
/// directory when no data dir exists.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("shelfscan"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shelfscan.log")
}

/// Log to a file; the terminal is owned by the TUI.
pub fn init_logging(cli: &Cli) -> Result<PathBuf> {
    let path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)?;
    WriteLogger::init(cli.log_level(), Config::default(), file)?;
    Ok(path)
}
