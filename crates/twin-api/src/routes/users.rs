//! User endpoints.

use axum::extract::{Path, State};
use axum::Json;
use memory_service::User;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UserCreateRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Create a user. A taken email is a 400.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<UserCreateRequest>,
) -> Result<Json<UserResponse>> {
    let user = state.memory.create_user(&req.name, &req.email).await?;
    Ok(Json(user.into()))
}

/// Get a user by id.
pub async fn get(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>> {
    let user = state.memory.get_user(user_id).await?;
    Ok(Json(user.into()))
}
