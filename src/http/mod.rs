//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID assigned and propagated)
//!     → /api/animals → animals.rs → upstream::UpstreamClient
//!     → /            → page.rs → page::PageSession → upstream::UpstreamClient
//!     → Send to client
//! ```

pub mod animals;
pub mod page;
pub mod request;
pub mod server;

pub use page::ProxyAnimalsApi;
pub use request::{request_id, MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
