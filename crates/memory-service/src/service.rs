//! Memory and user operations.

use std::sync::Arc;

use brain_core::{Brain, ChatRequest};
use database::validation::validate_assistant_id;
use database::{memory, user, Database, DatabaseError, Memory, User};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{MemoryError, Result};
use crate::summary::{clean_summary, summary_prompt, SUMMARY_MODEL};

/// A newly stored memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedMemory {
    pub memory_id: i64,
    pub summary: String,
}

/// Stores transcripts with generated summaries.
#[derive(Clone)]
pub struct MemoryService {
    db: Database,
    brain: Arc<dyn Brain>,
}

impl MemoryService {
    pub fn new(db: Database, brain: Arc<dyn Brain>) -> Self {
        Self { db, brain }
    }

    /// Get the database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Summarize a transcript and store it for a user.
    pub async fn save_memory(
        &self,
        user_id: i64,
        assistant_id: &str,
        transcript: &str,
    ) -> Result<SavedMemory> {
        validate_assistant_id(assistant_id).map_err(DatabaseError::from)?;

        if !user::user_exists(self.db.pool(), user_id).await? {
            return Err(MemoryError::NotFound(format!(
                "User with id {} not found",
                user_id
            )));
        }

        let request = ChatRequest::new(summary_prompt(transcript)).with_model(SUMMARY_MODEL);
        let reply = self.brain.send_message(request).await;
        if reply.is_degraded() {
            warn!(
                model = %reply.model_used,
                "Summary brain is degraded; storing its reply as the summary"
            );
        }
        let summary = clean_summary(&reply.text);

        let mut tx = self.db.pool().begin().await.map_err(internal)?;
        let stored =
            match memory::insert_memory(&mut *tx, user_id, assistant_id, transcript, &summary).await
            {
                Ok(stored) => stored,
                // Dropping `tx` rolls the insert back.
                Err(e) => {
                    return Err(match MemoryError::from(e) {
                        MemoryError::Internal(msg) => internal(msg),
                        other => other,
                    })
                }
            };
        tx.commit().await.map_err(internal)?;

        info!(memory = stored.id, user = user_id, "Memory saved");
        Ok(SavedMemory {
            memory_id: stored.id,
            summary,
        })
    }

    /// List a user's memories, newest first.
    pub async fn list_memories(&self, user_id: i64, limit: Option<i64>) -> Result<Vec<Memory>> {
        if !user::user_exists(self.db.pool(), user_id).await? {
            return Err(MemoryError::NotFound(format!(
                "User with id {} not found",
                user_id
            )));
        }

        let limit = limit.unwrap_or(memory::DEFAULT_LIST_LIMIT);
        Ok(memory::list_memories_for_user(self.db.pool(), user_id, limit).await?)
    }

    /// Delete a memory.
    pub async fn delete_memory(&self, memory_id: i64) -> Result<()> {
        memory::delete_memory(self.db.pool(), memory_id).await?;
        info!(memory = memory_id, "Memory deleted");
        Ok(())
    }

    /// Create a user. Fails with `Conflict` if the email is taken.
    pub async fn create_user(&self, name: &str, email: &str) -> Result<User> {
        let created = user::create_user(self.db.pool(), name, email).await?;
        info!(user = created.id, "User created");
        Ok(created)
    }

    /// Get a user.
    pub async fn get_user(&self, user_id: i64) -> Result<User> {
        Ok(user::get_user(self.db.pool(), user_id).await?)
    }

    /// Delete a user and, through the cascade, all of its memories.
    pub async fn delete_user(&self, user_id: i64) -> Result<()> {
        user::delete_user(self.db.pool(), user_id).await?;
        info!(user = user_id, "User deleted");
        Ok(())
    }
}

fn internal(err: impl std::fmt::Display) -> MemoryError {
    MemoryError::Internal(format!("Failed to save memory: {}", err))
}
