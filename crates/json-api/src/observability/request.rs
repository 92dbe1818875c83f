//! Per-request logging and request ids.

use std::time::{Duration, Instant};

use salvo::{
    handler,
    http::{StatusCode, header::HeaderValue},
    prelude::{Depot, FlowCtrl, Request, Response},
};
use tracing::{Instrument as _, Span, error, info, warn};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wraps each request in an `http.request` span and logs its outcome.
///
/// 4xx responses are logged at `warn`, 5xx at `error`, and anything slower
/// than `slow_threshold` gets an extra warning.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestLogger {
    slow_threshold: Duration,
}

impl RequestLogger {
    pub(crate) fn new(slow_threshold: Duration) -> Self {
        Self { slow_threshold }
    }
}

#[handler]
impl RequestLogger {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let started = Instant::now();

        let request_id = request_id(req.header::<String>(REQUEST_ID_HEADER));

        match HeaderValue::from_str(&request_id) {
            Ok(value) => {
                res.headers_mut().insert(REQUEST_ID_HEADER, value);
            }
            Err(source) => warn!(%request_id, "request id is not a valid header value: {source}"),
        }

        let method = req.method().to_string();
        let path = req.uri().path().to_owned();

        let span = tracing::info_span!(
            parent: None,
            "http.request",
            request_id = %request_id,
            method = %method,
            path = %path,
            remote_addr = %req.remote_addr(),
            status = tracing::field::Empty,
            duration_ms = tracing::field::Empty
        );

        ctrl.call_next(req, depot, res)
            .instrument(span.clone())
            .await;

        let status = res.status_code.unwrap_or(StatusCode::OK);
        let elapsed = started.elapsed();

        self.log_outcome(&span, status, elapsed);
    }
}

impl RequestLogger {
    fn log_outcome(&self, span: &Span, status: StatusCode, elapsed: Duration) {
        let duration_ms = elapsed.as_millis();

        span.record("status", status.as_u16());
        span.record("duration_ms", duration_ms);

        span.in_scope(|| {
            info!(status = status.as_u16(), duration_ms, "request.completed");

            if status.is_server_error() {
                error!(status = status.as_u16(), "server error response");
            } else if status.is_client_error() {
                warn!(status = status.as_u16(), "client error response");
            }

            if elapsed > self.slow_threshold {
                warn!(
                    duration_ms,
                    threshold_ms = self.slow_threshold.as_millis(),
                    "slow request detected"
                );
            }
        });
    }
}

/// Reuse a caller supplied id unless it is blank.
fn request_id(header: Option<String>) -> String {
    header
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}
