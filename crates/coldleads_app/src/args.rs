use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::platform::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(name = "coldleads")]
#[command(about = "One URL, one draft: generate a cold email for a company's CTO")]
#[command(version)]
pub struct Args {
    /// Company URL to submit as soon as the app starts
    pub url: Option<String>,

    /// Base URL of the lead service, e.g. http://127.0.0.1:8000
    #[arg(long)]
    pub api_base: Option<String>,

    /// Settings file (RON); a missing file means built-in defaults
    #[arg(long, default_value = "coldleads.ron")]
    pub config: PathBuf,

    /// Minimum level written to the log
    #[arg(long, value_enum, default_value_t = LogLevelArg::Info)]
    pub log_level: LogLevelArg,

    /// Where log lines go (overrides the settings file)
    #[arg(long, value_enum)]
    pub log_to: Option<LogDestination>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::Error,
            LogLevelArg::Warn => LevelFilter::Warn,
            LogLevelArg::Info => LevelFilter::Info,
            LogLevelArg::Debug => LevelFilter::Debug,
            LogLevelArg::Trace => LevelFilter::Trace,
        }
    }
}
