//! User entity model and DTOs.

use bookshelf_core::types::{Timestamp, UserId};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- never serialize this to API responses.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: UserId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub thumbnail: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new user.
///
/// The identity is generated by the caller (`Uuid::new_v4`) before the
/// insert; the password must already be hashed.
#[derive(Debug)]
pub struct NewUser {
    pub user_id: UserId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub thumbnail: String,
    pub password_hash: String,
}
