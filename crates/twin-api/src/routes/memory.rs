//! Conversation memory endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use memory_service::Memory;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MemorySaveRequest {
    pub user_id: i64,
    pub assistant_id: String,
    pub transcript: String,
}

#[derive(Debug, Serialize)]
pub struct MemorySaveResponse {
    pub status: String,
    pub memory_id: i64,
    pub summary: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct MemoryList {
    pub memories: Vec<Memory>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub status: String,
    pub message: String,
    pub deleted_id: i64,
}

/// Summarize and store a call transcript.
pub async fn save(
    State(state): State<AppState>,
    Json(req): Json<MemorySaveRequest>,
) -> Result<Json<MemorySaveResponse>> {
    let saved = state
        .memory
        .save_memory(req.user_id, &req.assistant_id, &req.transcript)
        .await?;

    Ok(Json(MemorySaveResponse {
        status: "saved".to_string(),
        memory_id: saved.memory_id,
        summary: saved.summary,
    }))
}

/// List a user's memories, newest first.
pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> Result<Json<MemoryList>> {
    let memories = state.memory.list_memories(user_id, query.limit).await?;

    Ok(Json(MemoryList {
        count: memories.len(),
        memories,
    }))
}

/// Delete a memory.
pub async fn delete(
    State(state): State<AppState>,
    Path(memory_id): Path<i64>,
) -> Result<Json<Deleted>> {
    state.memory.delete_memory(memory_id).await?;

    Ok(Json(Deleted {
        status: "success".to_string(),
        message: format!("Memory {} deleted successfully", memory_id),
        deleted_id: memory_id,
    }))
}
