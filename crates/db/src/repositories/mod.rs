//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Connections are checked out
//! of the bounded pool per statement and released on every exit path.

pub mod book_repo;
pub mod session_repo;
pub mod user_repo;

pub use book_repo::BookRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
