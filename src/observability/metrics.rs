//! Metrics collection and exposition.
//!
//! # Metrics
//! - `frontend_requests_total` (counter): requests by route, method, status
//! - `frontend_request_duration_seconds` (histogram): latency by route
//! - `frontend_upstream_status_total` (counter): non-2xx upstream answers by operation
//! - `frontend_upstream_failures_total` (counter): calls with no usable answer, by kind

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on `addr`. Failure is logged, not fatal.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(route: &'static str, method: &str, status: u16, start: Instant) {
    counter!(
        "frontend_requests_total",
        "route" => route,
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("frontend_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_upstream_status(operation: &'static str, status: u16) {
    counter!(
        "frontend_upstream_status_total",
        "operation" => operation,
        "status" => status.to_string()
    )
    .increment(1);
}

pub fn record_upstream_failure(kind: &'static str) {
    counter!("frontend_upstream_failures_total", "kind" => kind).increment(1);
}
