use clap::{Parser, ValueEnum};
use log::LevelFilter;

pub const DEFAULT_FILTER_COUNT: usize = 2;

#[derive(Debug, Parser)]
#[command(
    name = "malsites",
    version,
    about = "Filter string generator for HTTP malicious domains",
    long_about = "Copy the first N entries of $HOME/malicious_site_list.txt into $HOME/malicious_sites_trunc.txt.\n\nEach entry is trimmed of surrounding whitespace and entries are separated by a single newline, with no newline after the last one. Set MALSITES_ROOT to use a base directory other than $HOME."
)]
pub struct Cli {
    #[arg(
        short = 'n',
        long = "count",
        value_name = "COUNT",
        default_value_t = DEFAULT_FILTER_COUNT,
        help = "Number of filter strings to generate"
    )]
    pub count: usize,

    #[arg(
        long = "log-level",
        value_enum,
        default_value_t = LogLevel::Info,
        help = "Set stderr log verbosity"
    )]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}
