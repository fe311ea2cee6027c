//! Repository for the `logged_users` table -- the persisted set of
//! issued tokens.

use bookshelf_core::types::UserId;
use sqlx::PgPool;

use crate::models::session::SessionRecord;

/// Provides the session-store operations.
pub struct SessionRepo;

impl SessionRepo {
    /// Persist a session record for an issued token.
    ///
    /// The token string is the primary key, so inserting the same token
    /// twice fails; tokens are unique per login (each carries a fresh
    /// `jti`), so a conflict here indicates a bug upstream.
    pub async fn create(
        pool: &PgPool,
        token: &str,
        user_id: UserId,
    ) -> Result<SessionRecord, sqlx::Error> {
        sqlx::query_as::<_, SessionRecord>(
            "INSERT INTO logged_users (token, user_id)
             VALUES ($1, $2)
             RETURNING token, user_id, created_at",
        )
        .bind(token)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Look up the owning user of an exact token string, if the token is
    /// in the logged-in set.
    pub async fn find_owner(pool: &PgPool, token: &str) -> Result<Option<UserId>, sqlx::Error> {
        sqlx::query_scalar::<_, UserId>("SELECT user_id FROM logged_users WHERE token = $1")
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// Delete the session record matching the exact token string.
    ///
    /// Returns `true` if a record existed. Deleting a missing record is
    /// not an error; callers log which case occurred.
    pub async fn delete(pool: &PgPool, token: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM logged_users WHERE token = $1")
            .bind(token)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
