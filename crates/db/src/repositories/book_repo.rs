//! Repository for the `books` catalog table.

use sqlx::PgPool;

use crate::models::book::{Book, Shelf};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "authors, code1, code2, description, id, infolink, language, \
                       maturity_rating, page_count, preview_link, print_type, published_date, \
                       publisher, small_thumbnail, thumbnail, title, canonical_link, on_shelf, \
                       subtitle, categories, average_rating, ratings_count";

/// Read/shelf-mutation operations over the catalog.
pub struct BookRepo;

impl BookRepo {
    /// List every book currently on some shelf.
    pub async fn list_on_shelf(pool: &PgPool) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE on_shelf <> $1 ORDER BY title");
        sqlx::query_as::<_, Book>(&query)
            .bind(Shelf::None.as_str())
            .fetch_all(pool)
            .await
    }

    /// Substring-match books by author, title, or category.
    ///
    /// The caller-supplied text is always bound as a parameter, never
    /// spliced into the SQL. SQL `LIKE` wildcards inside the query text
    /// widen the match but cannot change the statement.
    pub async fn search(pool: &PgPool, text: &str) -> Result<Vec<Book>, sqlx::Error> {
        let pattern = format!("%{text}%");
        let query = format!(
            "SELECT {COLUMNS} FROM books
             WHERE authors ILIKE $1 OR title ILIKE $1 OR categories ILIKE $1
             ORDER BY title"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// Move a book to the given shelf. Returns `true` if the book exists.
    pub async fn set_shelf(pool: &PgPool, id: &str, shelf: Shelf) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE books SET on_shelf = $2 WHERE id = $1")
            .bind(id)
            .bind(shelf.as_str())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
