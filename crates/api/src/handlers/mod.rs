//! Request handlers.
//!
//! Handlers delegate to the repositories in `bookshelf_db` and map
//! errors via [`crate::error::AppError`].

pub mod auth;
pub mod books;
