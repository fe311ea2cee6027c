//! Handlers for the catalog and shelf routes. All of these require a
//! valid bearer token via the [`AuthUser`] extractor.

use axum::extract::{Path, State};
use bookshelf_core::error::CoreError;
use bookshelf_db::models::book::{Book, Shelf};
use bookshelf_db::repositories::BookRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::response::MsgResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Request body for `PUT /books/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateShelfRequest {
    pub shelf: String,
}

/// `{ "books": [...] }` listing envelope.
#[derive(Debug, Serialize)]
pub struct BooksResponse {
    pub books: Vec<Book>,
}

/// Echo of a successful shelf mutation.
#[derive(Debug, Serialize)]
pub struct ShelfResponse {
    pub msg: &'static str,
    pub id: String,
    pub shelf: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /books
///
/// List every book currently on some shelf.
pub async fn list_books(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<BooksResponse>> {
    let books = BookRepo::list_on_shelf(&state.pool).await?;
    Ok(Json(BooksResponse { books }))
}

/// POST /search
///
/// Substring-match the catalog by author, title, or category. An empty
/// result set is a 404, matching the catalog's contract.
pub async fn search(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<SearchRequest>,
) -> AppResult<Json<BooksResponse>> {
    tracing::debug!(user_id = %user.user_id, query = %input.query, "Catalog search");

    let books = BookRepo::search(&state.pool, &input.query).await?;
    if books.is_empty() {
        return Err(CoreError::NotFound("None found!".into()).into());
    }
    Ok(Json(BooksResponse { books }))
}

/// PUT /books/{id}
///
/// Move a book to the given shelf. Valid shelves are `wantToRead`,
/// `currentlyReading`, `read`, and `none`.
pub async fn update_shelf(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(input): Json<UpdateShelfRequest>,
) -> AppResult<Json<ShelfResponse>> {
    let shelf = Shelf::parse(&input.shelf)
        .ok_or_else(|| CoreError::Validation(format!("Unknown shelf: {}", input.shelf)))?;

    let updated = BookRepo::set_shelf(&state.pool, &id, shelf).await?;
    if !updated {
        return Err(CoreError::NotFound("No such book!".into()).into());
    }

    tracing::info!(user_id = %user.user_id, book_id = %id, shelf = shelf.as_str(), "Shelf updated");
    Ok(Json(ShelfResponse {
        msg: "Updated!",
        id,
        shelf: shelf.as_str(),
    }))
}

/// DELETE /books/{id}
///
/// Remove a book from every shelf (shorthand for setting `none`).
pub async fn remove_from_shelf(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<MsgResponse>> {
    let updated = BookRepo::set_shelf(&state.pool, &id, Shelf::None).await?;
    if !updated {
        return Err(CoreError::NotFound("No such book!".into()).into());
    }

    tracing::info!(user_id = %user.user_id, book_id = %id, "Book removed from shelf");
    Ok(Json(MsgResponse::new("Removed!")))
}
