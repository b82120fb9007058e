//! Responses relayed back to the page, and the failures that are not.

use std::time::Duration;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Body sent when the upstream list call fails.
pub const UPSTREAM_ERROR_BODY: &str = "Upstream error";

/// Body sent for failures the proxy does not relay.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// What the proxy hands back to its caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Relay {
    Json {
        status: StatusCode,
        payload: serde_json::Value,
    },
    Text {
        status: StatusCode,
        text: String,
    },
}

impl Relay {
    pub fn status(&self) -> StatusCode {
        match self {
            Relay::Json { status, .. } | Relay::Text { status, .. } => *status,
        }
    }

    /// The body exactly as it goes on the wire.
    pub fn body_text(&self) -> String {
        match self {
            Relay::Json { payload, .. } => payload.to_string(),
            Relay::Text { text, .. } => text.clone(),
        }
    }

    pub(crate) fn upstream_error() -> Self {
        Relay::Text {
            status: StatusCode::BAD_GATEWAY,
            text: UPSTREAM_ERROR_BODY.to_string(),
        }
    }
}

impl IntoResponse for Relay {
    fn into_response(self) -> Response {
        match self {
            Relay::Json { status, payload } => (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                payload.to_string(),
            )
                .into_response(),
            Relay::Text { status, text } => (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                text,
            )
                .into_response(),
        }
    }
}

/// Failures outside the relayed cases. All surface as a bare 500.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Transport(String),

    #[error("upstream did not answer within {0:?}")]
    Timeout(Duration),

    #[error("upstream returned undecodable JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("request body is not valid JSON: {0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error("failed to build upstream request: {0}")]
    Build(#[from] axum::http::Error),

    #[error("invalid upstream URL '{0}'")]
    InvalidUri(String),
}

impl ProxyError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProxyError::Transport(_) => "transport",
            ProxyError::Timeout(_) => "timeout",
            ProxyError::Decode(_) => "decode",
            ProxyError::InvalidBody(_) => "invalid_body",
            ProxyError::Build(_) => "build",
            ProxyError::InvalidUri(_) => "invalid_uri",
        }
    }

    /// The response a caller observes for this failure.
    pub fn to_relay(&self) -> Relay {
        Relay::Text {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            text: INTERNAL_ERROR_BODY.to_string(),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, kind = self.kind(), "Proxy request failed");
        self.to_relay().into_response()
    }
}
