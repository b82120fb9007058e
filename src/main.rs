//! Animal front end server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser                 ┌──────────────────────────────────────────┐
//!     ───────── GET/POST / ──▶│ http::page ─▶ page::PageSession          │
//!                             │                  │ (AnimalsApi)          │
//!     ─ GET/POST /api/animals▶│ http::animals    ▼                       │
//!                             │        └────▶ upstream::UpstreamClient ──┼──▶ Upstream
//!     ◀──────────── HTML/JSON │                                          │    /api/animals/
//!                             └──────────────────────────────────────────┘
//! ```
//!
//! Usage: `animal-frontend [config.toml]` (or set `ANIMALS_CONFIG`).

use tokio::net::TcpListener;

use animal_frontend::config::{load_or_default, loader::CONFIG_ENV, resolve_config_path};
use animal_frontend::lifecycle::{wait_for_signal, Shutdown};
use animal_frontend::observability::{logging, metrics};
use animal_frontend::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = resolve_config_path(std::env::args().nth(1), std::env::var(CONFIG_ENV).ok());
    let config = load_or_default(path.as_deref())?;

    logging::init(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = ?path,
        "animal-frontend starting"
    );
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let signal = shutdown.subscribe();

    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, signal).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
