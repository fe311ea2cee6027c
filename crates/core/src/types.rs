//! Type aliases shared across crates.

/// Server-generated opaque user identity.
pub type UserId = uuid::Uuid;

/// UTC timestamp used for all persisted time columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
