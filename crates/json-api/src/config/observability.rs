//! Logging & Request Tracing Config

use clap::{Args, ValueEnum};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One line per event, for terminals.
    Compact,

    /// One JSON object per event, with the active span stack, for log shippers.
    Json,
}

#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Base filter directive; `RUST_LOG` style directives are accepted
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(Debug, Args)]
pub struct ObservabilityConfig {
    /// Requests slower than this many milliseconds are logged at warn level
    #[arg(
        long,
        env = "SLOW_REQUEST_THRESHOLD_MS",
        default_value_t = 1_000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub slow_request_threshold_ms: u64,
}
