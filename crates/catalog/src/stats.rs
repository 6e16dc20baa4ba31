//! Read-only statistics over book sequences
//!
//! Stateless: every function works on whatever slice it is handed rather
//! than on a particular `Library`.

use bookery_core::{Book, Genre};
use std::fmt;

/// Returns the number of books whose genre equals `genre`
pub fn count_by_genre(books: &[Book], genre: Genre) -> usize {
    books.iter().filter(|book| book.genre() == genre).count()
}

/// Returns the mean page count across `books`
///
/// The division is unguarded: an empty slice divides zero by zero and
/// yields NaN.
pub fn average_page_count(books: &[Book]) -> f64 {
    let total: u64 = books.iter().map(|book| u64::from(book.page_count())).sum();
    total as f64 / books.len() as f64
}

/// One-pass summary of a catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSummary {
    pub total_books: usize,
    pub fiction_count: usize,
    pub nonfiction_count: usize,
    pub reference_count: usize,
    pub average_page_count: f64,
}

impl CatalogSummary {
    /// Computes genre counts and the page average for `books`
    pub fn from_books(books: &[Book]) -> Self {
        let mut fiction_count = 0;
        let mut nonfiction_count = 0;
        let mut reference_count = 0;

        for book in books {
            match book.genre() {
                Genre::Fiction => fiction_count += 1,
                Genre::NonFiction => nonfiction_count += 1,
                Genre::Reference => reference_count += 1,
            }
        }

        Self {
            total_books: books.len(),
            fiction_count,
            nonfiction_count,
            reference_count,
            average_page_count: average_page_count(books),
        }
    }
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total books      : {}", self.total_books)?;
        writeln!(f, "Fiction count    : {}", self.fiction_count)?;
        writeln!(f, "NonFiction count : {}", self.nonfiction_count)?;
        writeln!(f, "Reference count  : {}", self.reference_count)?;
        if self.average_page_count.is_nan() {
            write!(f, "Average pages    : -")
        } else {
            write!(f, "Average pages    : {:.1}", self.average_page_count)
        }
    }
}
