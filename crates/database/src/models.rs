//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A person whose conversations are remembered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Row id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Unique email address
    pub email: String,
    /// Creation timestamp (ISO 8601, UTC)
    pub created_at: String,
}

/// A remembered conversation: the raw transcript plus its summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Memory {
    /// Row id
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Voice assistant the conversation was held with
    pub assistant_id: String,
    /// Full transcript, never modified after insert
    pub transcript: String,
    /// Generated summary, may grow through appends
    pub summary: String,
    /// Creation timestamp (ISO 8601, UTC)
    pub created_at: String,
}
