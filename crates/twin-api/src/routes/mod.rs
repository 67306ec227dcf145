//! Route handlers for the digital twin API.

pub mod chat;
pub mod clone;
pub mod health;
pub mod memory;
pub mod users;
pub mod voice;
pub mod webhook;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Largest voice sample accepted for upload.
pub const UPLOAD_BODY_LIMIT: usize = 25 * 1024 * 1024;

/// Largest webhook body buffered. Larger events are answered with an
/// `error` outcome, still with status 200.
pub const WEBHOOK_BODY_LIMIT: usize = 64 * 1024 * 1024;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Service info and health checks
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/api/health", get(health::health))
        .route("/api/health/vapi", get(health::vapi_health))
        // Text chat
        .route("/api/chat/text", post(chat::send_text))
        .route("/api/chat/languages", get(chat::languages))
        .route("/api/chat/models", get(chat::models))
        // Voice sessions
        .route("/api/voice/start", post(voice::start))
        .route("/api/voice/stop/:session_id", post(voice::stop))
        .route("/api/voice/status/:session_id", get(voice::status))
        // Voice cloning
        .route(
            "/api/voice/clone/upload",
            post(clone::upload).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route("/api/voice/clone/create", post(clone::create))
        .route("/api/voice/clone/status/:clone_id", get(clone::status))
        .route("/api/voice/clone/preview", post(clone::preview))
        // Memories: GET takes a user id, DELETE a memory id
        .route("/api/memory/save", post(memory::save))
        .route("/api/memory/:id", get(memory::list).delete(memory::delete))
        // Users
        .route("/api/users/create", post(users::create))
        .route("/api/users/:user_id", get(users::get))
        // Provider callbacks
        .route(
            "/vapi/webhook",
            post(webhook::receive).layer(DefaultBodyLimit::max(WEBHOOK_BODY_LIMIT)),
        )
}
