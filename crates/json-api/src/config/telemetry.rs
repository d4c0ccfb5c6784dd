//! Log output and request timing settings.

use clap::{Args, ValueEnum};

/// Shape of each log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One terse line per event, for terminals.
    Compact,

    /// One JSON object per event, with the enclosing request span.
    Json,
}

#[derive(Debug, Args)]
pub struct TelemetryConfig {
    /// Filter directives, e.g. `info` or `bazaar_json=debug,info`
    #[arg(short = 'l', long = "log-level", env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Requests slower than this many milliseconds are logged as warnings
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000)]
    pub slow_request_threshold_ms: u64,
}
