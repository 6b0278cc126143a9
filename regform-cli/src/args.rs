use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "regform")]
#[command(about = "Drive the registration form validator from the terminal", long_about = None)]
pub struct Args {
    /// JSON settings file overriding the default form configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log file (defaults to the platform cache directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Validate age and sex on submit as well
    #[arg(long)]
    pub include_optional: bool,

    /// Skip all one-shot effects
    #[arg(long)]
    pub reduce_motion: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
