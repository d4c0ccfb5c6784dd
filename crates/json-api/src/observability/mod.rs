//! Logging, request tracing and Prometheus metrics.

mod metrics;
mod request;
mod routes;
mod subscriber;

pub(crate) use metrics::metrics_handler;
pub(crate) use request::request_logging;
pub(crate) use subscriber::init;
