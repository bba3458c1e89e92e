//! Request logging and HTTP metrics.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Logs every request line and records request count and latency.
///
/// The remote address is only known when the server was started with
/// connect info; in-process callers are logged as `-`.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let remote_addr = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| "-".to_string(), |ConnectInfo(addr)| addr.to_string());

    tracing::info!("{method} {path} - {remote_addr}");

    let start = Instant::now();
    let response = next.run(req).await;

    metrics::counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "status" => response.status().as_u16().to_string()
    )
    .increment(1);
    metrics::histogram!("http_request_duration_seconds", "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());

    response
}
