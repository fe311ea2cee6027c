pub mod auth;
pub mod books;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /login        POST   login (public)
/// /logout       POST   logout (public; revokes the submitted token)
/// /register     POST   register (public)
///
/// /books        GET    list books on a shelf (requires auth)
/// /search       POST   search the catalog (requires auth)
/// /books/{id}   PUT    move a book to a shelf (requires auth)
/// /books/{id}   DELETE remove a book from its shelf (requires auth)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new().merge(auth::router()).merge(books::router())
}
