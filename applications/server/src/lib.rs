//! Reverb Server Library
//!
//! Media-library search server exposing a native JSON API and a Subsonic
//! compatibility surface over the same library data.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod subsonic;

// Re-export commonly used types for convenience
pub use config::{ConfigSource, ServerConfig, StaticConfig};
pub use error::{ErrorEnvelope, Result, ServerError};
pub use routes::create_router;
pub use state::AppState;
