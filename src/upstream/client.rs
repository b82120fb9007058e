//! Forwarding to the upstream animal service.
//!
//! One pooled hyper client is shared by every request. Each call is a single
//! attempt: no retries, no fallback.

use std::str::FromStr;
use std::time::{Duration, Instant};

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderValue, Method, Request, StatusCode, Uri},
};
use hyper::body::Incoming;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use super::relay::{ProxyError, Relay};
use crate::config::UpstreamConfig;
use crate::http::request::X_REQUEST_ID;
use crate::observability::metrics;

/// Path of the list/create collection on the upstream.
pub const UPSTREAM_ANIMALS_PATH: &str = "/api/animals/";

/// Handle on the upstream service. Cheap to clone.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client<HttpConnector, Body>,
    animals_uri: Uri,
    timeout: Duration,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, ProxyError> {
        let raw = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            UPSTREAM_ANIMALS_PATH
        );
        let animals_uri = Uri::from_str(&raw).map_err(|_| ProxyError::InvalidUri(raw))?;

        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        Ok(Self {
            client,
            animals_uri,
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    pub fn animals_uri(&self) -> &Uri {
        &self.animals_uri
    }

    /// Fetch the list. Any non-2xx becomes a fixed 502; the upstream's own
    /// status and body are dropped.
    pub async fn list(&self, request_id: Option<&str>) -> Result<Relay, ProxyError> {
        let req = self
            .request(Method::GET, request_id)
            .header(header::CACHE_CONTROL, "no-store")
            .body(Body::empty())?;

        let (status, bytes) = self.send(req).await?;
        if !status.is_success() {
            tracing::warn!(
                request_id = request_id.unwrap_or("unknown"),
                upstream_status = %status,
                "Upstream rejected list request"
            );
            metrics::record_upstream_status("list", status.as_u16());
            return Ok(Relay::upstream_error());
        }

        let payload = serde_json::from_slice(&bytes).map_err(ProxyError::Decode)?;
        Ok(Relay::Json {
            status: StatusCode::OK,
            payload,
        })
    }

    /// Forward a create. The upstream status is always preserved; the body is
    /// relayed as JSON when it parses, as raw text otherwise.
    pub async fn create(&self, body: &[u8], request_id: Option<&str>) -> Result<Relay, ProxyError> {
        let payload: serde_json::Value =
            serde_json::from_slice(body).map_err(ProxyError::InvalidBody)?;
        let encoded = serde_json::to_vec(&payload).map_err(ProxyError::InvalidBody)?;

        let req = self
            .request(Method::POST, request_id)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(encoded))?;

        let (status, bytes) = self.send(req).await?;
        if !status.is_success() {
            metrics::record_upstream_status("create", status.as_u16());
        }

        let text = String::from_utf8_lossy(&bytes).into_owned();
        Ok(match serde_json::from_str(&text) {
            Ok(payload) => Relay::Json { status, payload },
            Err(_) => Relay::Text { status, text },
        })
    }

    fn request(&self, method: Method, request_id: Option<&str>) -> axum::http::request::Builder {
        let mut builder = Request::builder()
            .method(method)
            .uri(self.animals_uri.clone());
        if let Some(id) = request_id.and_then(|id| HeaderValue::from_str(id).ok()) {
            builder = builder.header(X_REQUEST_ID, id);
        }
        builder
    }

    async fn send(&self, req: Request<Body>) -> Result<(StatusCode, Bytes), ProxyError> {
        let start = Instant::now();
        let method = req.method().clone();

        let exchange = async {
            let response: hyper::Response<Incoming> = self
                .client
                .request(req)
                .await
                .map_err(|e| ProxyError::Transport(e.to_string()))?;
            let status = response.status();
            let bytes = axum::body::to_bytes(Body::new(response.into_body()), usize::MAX)
                .await
                .map_err(|e| ProxyError::Transport(e.to_string()))?;
            Ok::<_, ProxyError>((status, bytes))
        };

        let result = match tokio::time::timeout(self.timeout, exchange).await {
            Ok(result) => result,
            Err(_) => Err(ProxyError::Timeout(self.timeout)),
        };

        match &result {
            Ok((status, bytes)) => tracing::debug!(
                method = %method,
                uri = %self.animals_uri,
                status = %status,
                bytes = bytes.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Upstream responded"
            ),
            Err(e) => {
                tracing::error!(method = %method, uri = %self.animals_uri, error = %e, "Upstream call failed");
                metrics::record_upstream_failure(e.kind());
            }
        }

        result
    }
}
