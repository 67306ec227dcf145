//! Voice platform webhook.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use memory_service::{CallEvent, WebhookOutcome};
use tracing::warn;

use crate::state::AppState;

/// Receive a call event. Always answers 200 with the outcome, including
/// when the body cannot be read or parsed.
pub async fn receive(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Json<WebhookOutcome> {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!("Unreadable webhook body: {}", rejection.body_text());
            return Json(WebhookOutcome::failed(rejection.body_text()));
        }
    };

    let event: CallEvent = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(e) => {
            warn!("Unreadable webhook payload: {}", e);
            return Json(WebhookOutcome::failed(e));
        }
    };

    Json(state.memory.ingest_call_event(&event).await)
}
