//! Row models and DTOs for the persistence layer.

pub mod book;
pub mod session;
pub mod user;
