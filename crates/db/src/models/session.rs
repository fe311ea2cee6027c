//! Session record model for the `logged_users` table.

use bookshelf_core::types::{Timestamp, UserId};
use sqlx::FromRow;

/// One issued-token row. The raw token string is the primary key, so at
/// most one record exists per issued token; a user may hold several
/// records at once (one per concurrent login).
#[derive(Debug, Clone, FromRow)]
pub struct SessionRecord {
    pub token: String,
    pub user_id: UserId,
    pub created_at: Timestamp,
}
