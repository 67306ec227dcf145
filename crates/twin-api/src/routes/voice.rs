//! Live voice session endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use vapi_client::{SessionStatus, StatusOutcome, StopOutcome};

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct VoiceStartRequest {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub voice_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VoiceStartResponse {
    pub session_id: String,
    pub status: SessionStatus,
    pub websocket_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Start a voice session. Falls back to a mock, demo or error session.
pub async fn start(
    State(state): State<AppState>,
    Json(req): Json<VoiceStartRequest>,
) -> Json<VoiceStartResponse> {
    let session = state
        .sessions
        .start(req.language.as_deref(), req.voice_id.as_deref())
        .await;

    Json(VoiceStartResponse {
        session_id: session.id,
        status: session.status,
        websocket_url: session.websocket_url,
        note: session.note,
    })
}

/// Stop a voice session.
pub async fn stop(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<StopOutcome> {
    Json(state.sessions.stop(&session_id).await)
}

/// Get the status of a voice session.
pub async fn status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<StatusOutcome> {
    Json(state.sessions.status(&session_id).await)
}
