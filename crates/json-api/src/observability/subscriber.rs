//! Global tracing subscriber.

use std::{
    error::Error as StdError,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use thiserror::Error;
use tracing_subscriber::{EnvFilter, filter::ParseError};

use crate::config::telemetry::{LogFormat, TelemetryConfig};

/// Chatty dependencies are capped at `warn` unless named explicitly.
const DEPENDENCY_DIRECTIVES: &str = "h2=warn,hyper=warn,sqlx=warn,salvo_core=warn";

static SLOW_REQUEST_MS: AtomicU64 = AtomicU64::new(1_000);

#[derive(Debug, Error)]
pub(crate) enum SubscriberError {
    #[error("invalid log filter `{directives}`")]
    Filter {
        directives: String,
        #[source]
        source: ParseError,
    },

    #[error("a global tracing subscriber is already installed")]
    Install(#[source] Box<dyn StdError + Send + Sync>),
}

/// Install the process-wide subscriber and record the slow-request threshold.
///
/// Call once, before the listener binds.
pub(crate) fn init(config: &TelemetryConfig) -> Result<(), SubscriberError> {
    SLOW_REQUEST_MS.store(config.slow_request_threshold_ms, Ordering::Relaxed);

    let filter = env_filter(&config.log_level)?;

    match config.log_format {
        LogFormat::Compact => tracing_subscriber::fmt()
            .compact()
            .with_env_filter(filter)
            .with_file(true)
            .with_line_number(true)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(false)
            .try_init(),
    }
    .map_err(SubscriberError::Install)
}

pub(super) fn slow_request_threshold() -> Duration {
    Duration::from_millis(SLOW_REQUEST_MS.load(Ordering::Relaxed))
}

fn env_filter(log_level: &str) -> Result<EnvFilter, SubscriberError> {
    let directives = format!("{log_level},{DEPENDENCY_DIRECTIVES}");

    EnvFilter::try_new(&directives)
        .map_err(|source| SubscriberError::Filter { directives, source })
}
