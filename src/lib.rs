//! Animal list front end: a same-origin proxy to the upstream animal service
//! and the page workflow that lists, filters and creates animals through it.

pub mod animals;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod page;
pub mod upstream;

pub use config::FrontendConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
