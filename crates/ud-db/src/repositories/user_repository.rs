//! User repository - raw persistence outcomes for the users table.
//!
//! This layer is a conduit to storage: it reports what the database did
//! (absence, duplicate key, modified counts) and leaves every judgement
//! about those outcomes to the caller. No validation happens here.

use crate::Result as DbResult;

use ud_core::{User, UserUpdate};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Raw result of a delete: the driver-level acknowledgement plus how many
/// rows the key matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &str) -> DbResult<Option<User>> {
        let row = sqlx::query("SELECT id, name FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    /// All users carrying exactly this name. Order is whatever the engine
    /// returns.
    pub async fn find_by_name(&self, name: &str) -> DbResult<Vec<User>> {
        let rows = sqlx::query("SELECT id, name FROM users WHERE name = ?")
            .bind(name)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_user).collect()
    }

    pub async fn find_all(&self) -> DbResult<Vec<User>> {
        let rows = sqlx::query("SELECT id, name FROM users")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_user).collect()
    }

    /// Insert a full record. A primary-key collision surfaces as
    /// `DbError::DuplicateKey`; insertion is never an upsert.
    pub async fn insert(&self, user: &User) -> DbResult<()> {
        sqlx::query("INSERT INTO users (id, name) VALUES (?, ?)")
            .bind(&user.id)
            .bind(&user.name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Apply the present fields of `update` to the row matching `id` and
    /// report how many rows matched. An update carrying nothing applicable
    /// still reports the match count, so callers can tell a missing row
    /// from a no-op.
    pub async fn update_partial(&self, id: &str, update: &UserUpdate) -> DbResult<u64> {
        let Some(name) = &update.name else {
            let row = sqlx::query("SELECT COUNT(*) AS n FROM users WHERE id = ?")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
            let matched: i64 = row.try_get("n")?;

            return Ok(matched as u64);
        };

        let result = sqlx::query("UPDATE users SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete the row matching `id`. The driver reports a failed command as
    /// an error, so any outcome that comes back at all is acknowledged.
    pub async fn delete_by_id(&self, id: &str) -> DbResult<DeleteOutcome> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(DeleteOutcome {
            acknowledged: true,
            deleted_count: result.rows_affected(),
        })
    }

    fn row_to_user(row: &SqliteRow) -> DbResult<User> {
        Ok(User {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
        })
    }
}
