//! Per-request span, request id and outcome logging.

use std::time::{Duration, Instant};

use salvo::{
    handler,
    http::{StatusCode, header::HeaderValue},
    prelude::{Depot, FlowCtrl, Request, Response},
};
use tracing::{Instrument as _, error, field, info, info_span, warn};
use uuid::Uuid;

use super::{metrics, routes, subscriber};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// How a finished request is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    Rejected,
    Failed,
}

impl Outcome {
    fn of(status: StatusCode) -> Self {
        if status.is_server_error() {
            Self::Failed
        } else if status.is_client_error() {
            Self::Rejected
        } else {
            Self::Success
        }
    }
}

/// Reuse the caller's `x-request-id` when it is usable in a response header,
/// otherwise mint a UUID v7.
fn request_id(supplied: Option<&HeaderValue>) -> HeaderValue {
    supplied
        .filter(|value| !value.to_str().unwrap_or_default().trim().is_empty())
        .cloned()
        .unwrap_or_else(|| {
            HeaderValue::from_str(&Uuid::now_v7().to_string())
                .unwrap_or_else(|_ignored| HeaderValue::from_static("unknown"))
        })
}

/// Wrap the rest of the chain in an `http.request` span, then log and count
/// the response. `/metrics` scrapes are passed straight through.
#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let route = routes::route_label(req.uri().path());

    if route == "/metrics" {
        ctrl.call_next(req, depot, res).await;
        return;
    }

    let started = Instant::now();
    let request_id = request_id(req.headers().get(REQUEST_ID_HEADER));
    let request_id_text = request_id.to_str().unwrap_or_default().to_owned();
    let method = req.method().clone();
    let _in_flight = metrics::InFlight::enter();

    res.headers_mut().insert(REQUEST_ID_HEADER, request_id);

    let span = info_span!(
        parent: None,
        "http.request",
        request_id = %request_id_text,
        method = %method,
        route,
        path = %req.uri().path(),
        remote_addr = %req.remote_addr(),
        status = field::Empty,
        duration_ms = field::Empty,
    );

    ctrl.call_next(req, depot, res).instrument(span.clone()).await;

    let elapsed = started.elapsed();
    let status = res.status_code.unwrap_or(StatusCode::OK);

    metrics::record(method.as_str(), route, status, elapsed);

    span.record("status", status.as_u16());
    span.record("duration_ms", elapsed.as_millis());

    span.in_scope(|| report(status, elapsed, subscriber::slow_request_threshold()));
}

fn report(status: StatusCode, elapsed: Duration, slow_after: Duration) {
    let status_code = status.as_u16();

    match Outcome::of(status) {
        Outcome::Success => info!(status = status_code, "request.completed"),
        Outcome::Rejected => warn!(status = status_code, "request.completed"),
        Outcome::Failed => error!(status = status_code, "request.completed"),
    }

    if elapsed > slow_after {
        warn!(
            duration_ms = elapsed.as_millis(),
            threshold_ms = slow_after.as_millis(),
            "request.slow"
        );
    }
}
