//! Same-origin proxy for the animal collection.

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
};

use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::upstream::{ProxyError, Relay};

const ROUTE: &str = "/api/animals";

pub async fn list_animals(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Relay, ProxyError> {
    let start = Instant::now();
    let result = state.upstream.list(request_id(&headers)).await;
    record("GET", &result, start);
    result
}

pub async fn create_animal(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Relay, ProxyError> {
    let start = Instant::now();
    let result = state.upstream.create(&body, request_id(&headers)).await;
    record("POST", &result, start);
    result
}

fn record(method: &str, result: &Result<Relay, ProxyError>, start: Instant) {
    let status = match result {
        Ok(relay) => relay.status(),
        Err(e) => e.to_relay().status(),
    };
    tracing::debug!(method, status = %status, "Proxied animals request");
    metrics::record_request(ROUTE, method, status.as_u16(), start);
}
