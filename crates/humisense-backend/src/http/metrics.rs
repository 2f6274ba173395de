use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;

/// `GET /metrics`: Prometheus text exposition.
pub async fn metrics(State(app): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        app.metrics().render(),
    )
}

/// Per-route request counter and latency histogram.
///
/// Requests that hit no route are labelled `route="unmatched"`.
pub async fn track(State(app): State<AppState>, req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let started = Instant::now();

    let resp = next.run(req).await;

    let elapsed = started.elapsed();
    let status = resp.status();
    let m = app.metrics();
    m.http_requests
        .inc(&[("route", route.as_str()), ("status", status.as_str())]);
    m.http_duration.observe(&[("route", route.as_str())], elapsed);
    tracing::debug!(%route, status = status.as_u16(), micros = elapsed.as_micros() as u64, "request");
    resp
}
