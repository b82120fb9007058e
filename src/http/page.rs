//! The page at `/`, rendered on the server.
//!
//! Each request runs a fresh page session. Its list and create calls go
//! through the same proxy code as `/api/animals`, so the page sees exactly
//! what a browser calling the proxy would.

use std::time::Instant;

use axum::{
    extract::{Form, Query, State},
    http::HeaderMap,
    response::Html,
};
use serde::Deserialize;

use crate::animals::{decode_list, expect_ok, Animal, AnimalsApi, FetchError, NewAnimal};
use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::page::{render::render_page, Msg, PageSession};
use crate::upstream::{Relay, UpstreamClient};

const ROUTE: &str = "/";

/// [`AnimalsApi`] backed by the in-process proxy.
#[derive(Clone)]
pub struct ProxyAnimalsApi {
    upstream: UpstreamClient,
    request_id: Option<String>,
}

impl ProxyAnimalsApi {
    pub fn new(upstream: UpstreamClient, request_id: Option<String>) -> Self {
        Self {
            upstream,
            request_id,
        }
    }

    /// Collapse a proxy outcome into what its HTTP response would carry.
    fn observe(outcome: Result<Relay, crate::upstream::ProxyError>) -> Result<String, FetchError> {
        let relay = outcome.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Proxy request failed");
            e.to_relay()
        });
        expect_ok(relay.status().as_u16(), relay.body_text())
    }
}

impl AnimalsApi for ProxyAnimalsApi {
    async fn list(&self) -> Result<Vec<Animal>, FetchError> {
        let outcome = self.upstream.list(self.request_id.as_deref()).await;
        let body = Self::observe(outcome)?;
        decode_list(&body)
    }

    async fn create(&self, animal: NewAnimal) -> Result<(), FetchError> {
        let body = serde_json::to_vec(&animal).map_err(|e| FetchError::Decode(e.to_string()))?;
        let outcome = self
            .upstream
            .create(&body, self.request_id.as_deref())
            .await;
        Self::observe(outcome).map(|_| ())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub filter: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub filter: String,
}

fn session(state: &AppState, headers: &HeaderMap) -> PageSession<ProxyAnimalsApi> {
    PageSession::new(ProxyAnimalsApi::new(
        state.upstream.clone(),
        request_id(headers).map(ToOwned::to_owned),
    ))
}

/// Initial render and Refresh.
pub async fn show_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let start = Instant::now();
    let mut page = session(&state, &headers);
    page.mount().await;
    page.dispatch(Msg::FilterChanged(query.filter)).await;

    metrics::record_request(ROUTE, "GET", 200, start);
    Html(render_page(&page.view()))
}

/// Create form submission: load, create, reload, render.
pub async fn submit_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<CreateForm>,
) -> Html<String> {
    let start = Instant::now();
    let mut page = session(&state, &headers);
    page.mount().await;
    page.dispatch(Msg::FilterChanged(form.filter)).await;
    page.submit(form.name).await;

    if let Some(error) = page.state().error() {
        tracing::info!(error, "Create from page failed");
    }

    metrics::record_request(ROUTE, "POST", 200, start);
    Html(render_page(&page.view()))
}
