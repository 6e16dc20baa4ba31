//! Catalog file load/save
//!
//! Catalog files are plain JSON arrays of books.

use crate::error::{CatalogError, Result};
use bookery_core::{Book, Validator};
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Loads a catalog file, re-validating every entry
///
/// serde bypasses the `Book` constructor, so each loaded book is run
/// through `Validator`; the first invalid entry rejects the whole load.
pub fn load_books(path: impl AsRef<Path>) -> Result<Vec<Book>> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)?;
    let books: Vec<Book> = serde_json::from_str(&data)?;

    for book in &books {
        if let Err(problems) = book.validate() {
            let reasons = problems.join("; ");
            warn!("Rejecting catalog file {}: {}", path.display(), reasons);
            return Err(CatalogError::InvalidBook { reasons });
        }
    }

    info!("Loaded {} books from {}", books.len(), path.display());
    Ok(books)
}

/// Writes `books` to `path` as pretty JSON
pub fn save_books(path: impl AsRef<Path>, books: &[Book]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(books)?;
    fs::write(path, json)?;

    info!("Exported {} books to {}", books.len(), path.display());
    Ok(())
}
