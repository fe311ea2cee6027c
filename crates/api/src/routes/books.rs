//! Route definitions for the catalog and shelf operations.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::books;
use crate::state::AppState;

/// Protected catalog routes; each handler authenticates via `AuthUser`.
///
/// ```text
/// GET    /books       -> list_books
/// POST   /search      -> search
/// PUT    /books/{id}  -> update_shelf
/// DELETE /books/{id}  -> remove_from_shelf
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/books", get(books::list_books))
        .route("/search", post(books::search))
        .route(
            "/books/{id}",
            put(books::update_shelf).delete(books::remove_from_shelf),
        )
}
