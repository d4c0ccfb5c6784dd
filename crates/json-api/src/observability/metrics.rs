//! Prometheus request metrics and the `/metrics` scrape endpoint.

use std::{sync::LazyLock, time::Duration};

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};
use salvo::{
    Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

const NAMESPACE: &str = "bazaar";

const SUBSYSTEM: &str = "http";

/// Catalogue reads sit in the low milliseconds, uploads can take seconds.
const DURATION_BUCKETS: [f64; 11] = [
    0.002, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 10.0,
];

struct HttpMetrics {
    registry: Registry,
    responses: IntCounterVec,
    latency: HistogramVec,
    in_flight: IntGauge,
}

impl HttpMetrics {
    fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let responses = IntCounterVec::new(
            Opts::new("responses_total", "Responses sent, by method, route and status.")
                .namespace(NAMESPACE)
                .subsystem(SUBSYSTEM),
            &["method", "route", "status"],
        )?;

        let latency = HistogramVec::new(
            HistogramOpts::new("request_seconds", "Time spent handling a request.")
                .namespace(NAMESPACE)
                .subsystem(SUBSYSTEM)
                .buckets(DURATION_BUCKETS.to_vec()),
            &["method", "route"],
        )?;

        let in_flight = IntGauge::with_opts(
            Opts::new("requests_in_flight", "Requests currently being handled.")
                .namespace(NAMESPACE)
                .subsystem(SUBSYSTEM),
        )?;

        registry.register(Box::new(responses.clone()))?;
        registry.register(Box::new(latency.clone()))?;
        registry.register(Box::new(in_flight.clone()))?;

        Ok(Self {
            registry,
            responses,
            latency,
            in_flight,
        })
    }

    fn render(&self) -> prometheus::Result<String> {
        let mut buffer = String::new();

        TextEncoder::new().encode_utf8(&self.registry.gather(), &mut buffer)?;

        Ok(buffer)
    }
}

/// `None` when the collectors could not be built. Requests are then served
/// without metrics.
static METRICS: LazyLock<Option<HttpMetrics>> = LazyLock::new(|| {
    HttpMetrics::new()
        .inspect_err(|source| error!("http metrics disabled: {source}"))
        .ok()
});

/// Holds one slot of the in-flight gauge for as long as it lives.
pub(super) struct InFlight(Option<&'static IntGauge>);

impl InFlight {
    pub(super) fn enter() -> Self {
        let gauge = METRICS.as_ref().map(|metrics| &metrics.in_flight);

        if let Some(gauge) = gauge {
            gauge.inc();
        }

        Self(gauge)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if let Some(gauge) = self.0 {
            gauge.dec();
        }
    }
}

pub(super) fn record(method: &str, route: &str, status: StatusCode, elapsed: Duration) {
    let Some(metrics) = METRICS.as_ref() else {
        return;
    };

    metrics
        .responses
        .with_label_values(&[method, route, status.as_str()])
        .inc();

    metrics
        .latency
        .with_label_values(&[method, route])
        .observe(elapsed.as_secs_f64());
}

/// Prometheus text exposition of the request metrics.
#[handler]
pub(crate) async fn metrics_handler(res: &mut Response) {
    let Some(metrics) = METRICS.as_ref() else {
        res.status_code(StatusCode::SERVICE_UNAVAILABLE);

        return;
    };

    match metrics.render() {
        Ok(body) => {
            res.headers_mut().insert(
                CONTENT_TYPE,
                HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
            );
            res.render(body);
        }
        Err(source) => {
            error!("failed to encode metrics: {source}");

            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
