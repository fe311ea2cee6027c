//! Catalog book model.

use serde::Serialize;
use sqlx::FromRow;

/// Full book row from the `books` table.
///
/// Serialized to the wire in camelCase to match the catalog's JSON shape.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub authors: String,
    pub code1: String,
    pub code2: String,
    pub description: String,
    pub id: String,
    pub infolink: String,
    pub language: String,
    pub maturity_rating: String,
    pub page_count: i32,
    pub preview_link: String,
    pub print_type: String,
    pub published_date: String,
    pub publisher: String,
    pub small_thumbnail: String,
    pub thumbnail: String,
    pub title: String,
    pub canonical_link: String,
    pub on_shelf: String,
    pub subtitle: String,
    pub categories: String,
    pub average_rating: Option<f64>,
    pub ratings_count: Option<i32>,
}

/// Shelves a book may sit on. `None` means the book is on no shelf and
/// is excluded from the `/books` listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shelf {
    WantToRead,
    CurrentlyReading,
    Read,
    None,
}

impl Shelf {
    /// The value stored in the `on_shelf` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Shelf::WantToRead => "wantToRead",
            Shelf::CurrentlyReading => "currentlyReading",
            Shelf::Read => "read",
            Shelf::None => "none",
        }
    }

    /// Parse a client-supplied shelf name. Returns `None` for anything
    /// outside the allowed set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "wantToRead" => Some(Shelf::WantToRead),
            "currentlyReading" => Some(Shelf::CurrentlyReading),
            "read" => Some(Shelf::Read),
            "none" => Some(Shelf::None),
            _ => None,
        }
    }
}
