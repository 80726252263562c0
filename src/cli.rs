//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{self, Settings};
use crate::logging::LogOptions;

/// A terminal mockup of the MediCitas appointment app
#[derive(Parser, Debug)]
#[command(name = "medicitas", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Screen to open on startup, e.g. dashboard or search-doctors
    #[arg(short, long, value_name = "NAME")]
    pub screen: Option<String>,

    /// Event loop tick rate in milliseconds
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_rate: Option<u64>,

    /// Log filter directive, overriding RUST_LOG
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Directory for log files
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long)]
    pub init_config: bool,
}

impl Cli {
    /// Path of the configuration file: the `--config` argument or the default.
    pub fn config_path(&self) -> config::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => config::Config::default_path(),
        }
    }

    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            dir: self.log_dir.clone(),
            filter: self.log_level.clone(),
        }
    }

    /// Apply command line overrides on top of the file settings.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(screen) = &self.screen {
            settings.start_screen = screen.clone();
        }
        if let Some(tick_rate) = self.tick_rate {
            settings.tick_rate_ms = tick_rate;
        }
    }
}
