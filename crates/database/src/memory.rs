//! Memory persistence.
//!
//! Write functions are generic over the executor so callers can run them
//! inside a transaction (`&mut *tx`) or directly on the pool.

use sqlx::{Executor, Sqlite, SqlitePool};

use crate::error::{DatabaseError, Result};
use crate::models::Memory;
use crate::validation::validate_assistant_id;

/// Default number of memories returned by a listing.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Insert a memory and return the stored row.
///
/// Fails with `NotFound` if the user does not exist.
pub async fn insert_memory<'e, E>(
    executor: E,
    user_id: i64,
    assistant_id: &str,
    transcript: &str,
    summary: &str,
) -> Result<Memory>
where
    E: Executor<'e, Database = Sqlite>,
{
    validate_assistant_id(assistant_id)?;

    sqlx::query_as::<_, Memory>(
        r#"
        INSERT INTO memories (user_id, assistant_id, transcript, summary)
        VALUES (?, ?, ?, ?)
        RETURNING id, user_id, assistant_id, transcript, summary, created_at
        "#,
    )
    .bind(user_id)
    .bind(assistant_id.trim())
    .bind(transcript)
    .bind(summary)
    .fetch_one(executor)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_foreign_key_violation() {
                return DatabaseError::NotFound {
                    entity: "User",
                    id: user_id.to_string(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })
}

/// Get a memory by ID.
pub async fn get_memory(pool: &SqlitePool, id: i64) -> Result<Memory> {
    sqlx::query_as::<_, Memory>(
        r#"
        SELECT id, user_id, assistant_id, transcript, summary, created_at
        FROM memories
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Memory",
        id: id.to_string(),
    })
}

/// List a user's memories, newest first, at most `limit` rows.
///
/// A negative limit is treated as zero.
pub async fn list_memories_for_user(
    pool: &SqlitePool,
    user_id: i64,
    limit: i64,
) -> Result<Vec<Memory>> {
    let memories = sqlx::query_as::<_, Memory>(
        r#"
        SELECT id, user_id, assistant_id, transcript, summary, created_at
        FROM memories
        WHERE user_id = ?
        ORDER BY created_at DESC, id DESC
        LIMIT ?
        "#,
    )
    .bind(user_id)
    .bind(limit.max(0))
    .fetch_all(pool)
    .await?;

    Ok(memories)
}

/// Most recently inserted memory for a user and assistant.
pub async fn latest_memory_for(
    pool: &SqlitePool,
    user_id: i64,
    assistant_id: &str,
) -> Result<Option<Memory>> {
    let memory = sqlx::query_as::<_, Memory>(
        r#"
        SELECT id, user_id, assistant_id, transcript, summary, created_at
        FROM memories
        WHERE user_id = ? AND assistant_id = ?
        ORDER BY id DESC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .bind(assistant_id)
    .fetch_optional(pool)
    .await?;

    Ok(memory)
}

/// Append text to a memory's summary.
pub async fn append_to_summary<'e, E>(executor: E, id: i64, text: &str) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        r#"
        UPDATE memories
        SET summary = summary || ?
        WHERE id = ?
        "#,
    )
    .bind(text)
    .bind(id)
    .execute(executor)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Memory",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Delete a memory.
pub async fn delete_memory(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM memories
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Memory",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Number of memories a user owns.
pub async fn count_memories_for_user(pool: &SqlitePool, user_id: i64) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM memories WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}
