use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable; the only shared mutable resource is the
/// connection pool, which manages its own synchronization.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: bookshelf_db::DbPool,
    /// Server configuration, including the process-wide signing key.
    pub config: Arc<ServerConfig>,
}
