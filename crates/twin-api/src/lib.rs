//! HTTP gateway for the digital twin.
//!
//! Routes are thin: each handler delegates to one component held in
//! [`AppState`] and shapes its result as JSON.

pub mod config;
pub mod cors;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;

pub use config::{Config, ConfigError};
pub use error::{ApiError, Result};
pub use state::AppState;

/// Build the application with all routes and the CORS policy.
pub fn app(state: AppState, frontend_url: &str) -> Router {
    routes::router()
        .layer(cors::cors_layer(frontend_url))
        .with_state(state)
}
