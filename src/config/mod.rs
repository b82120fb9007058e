//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), named by argv[1] or ANIMALS_CONFIG
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → FrontendConfig (validated, immutable)
//!     → handed to the HTTP server at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so an absent file means the stock setup
//!   (upstream at http://localhost:8000)
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, resolve_config_path, ConfigError};
pub use schema::{
    FrontendConfig, LimitsConfig, ListenerConfig, ObservabilityConfig, TimeoutConfig,
    UpstreamConfig,
};
pub use validation::ValidationError;
