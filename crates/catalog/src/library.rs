//! The Library aggregate

use bookery_core::{Book, DomainError};
use log::info;

/// A named library holding an ordered catalog of books
///
/// The catalog keeps insertion order, allows duplicates, and is exposed
/// for direct external mutation through [`Library::catalog_mut`].
#[derive(Debug, Clone)]
pub struct Library {
    name: String,
    catalog: Vec<Book>,
}

impl Library {
    /// Constructs a library with the given name and initial books
    ///
    /// Fails if the name is empty or blank. The initial books are copied
    /// into a fresh internal sequence; the caller's slice is not aliased.
    pub fn new(name: impl Into<String>, initial_books: &[Book]) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::blank("library name"));
        }

        let catalog = initial_books.to_vec();
        info!("Opened library '{}' with {} books", name, catalog.len());

        Ok(Self { name, catalog })
    }

    /// Appends a book to the end of the catalog
    pub fn add_book(&mut self, book: Book) {
        info!("Adding '{}' to '{}'", book.title(), self.name);
        self.catalog.push(book);
    }

    /// Returns the library's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the catalog in insertion order
    pub fn catalog(&self) -> &[Book] {
        &self.catalog
    }

    /// Returns the live internal catalog
    ///
    /// Callers may append, remove, or reorder entries in place; the
    /// library does not re-validate after external mutation.
    pub fn catalog_mut(&mut self) -> &mut Vec<Book> {
        &mut self.catalog
    }
}
