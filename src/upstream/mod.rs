//! Upstream animal service subsystem.
//!
//! # Data Flow
//! ```text
//! GET  /api/animals  → client.rs list()   → upstream GET  /api/animals/
//!                                           2xx     → Relay::Json (200)
//!                                           non-2xx → Relay::Text (502 "Upstream error")
//! POST /api/animals  → client.rs create() → upstream POST /api/animals/
//!                                           JSON body → Relay::Json (upstream status)
//!                                           other     → Relay::Text (upstream status)
//! ```
//!
//! # Design Decisions
//! - GET collapses every upstream failure status into one 502
//! - POST keeps the upstream status, body best-effort
//! - Network failures are not relayed: they become a bare 500 (relay.rs)

pub mod client;
pub mod relay;

pub use client::{UpstreamClient, UPSTREAM_ANIMALS_PATH};
pub use relay::{ProxyError, Relay, INTERNAL_ERROR_BODY, UPSTREAM_ERROR_BODY};
