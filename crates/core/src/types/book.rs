//! Book domain model

use crate::error::DomainError;
use crate::types::Validator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Genre of a catalog entry
///
/// Parses from, and displays as, the exact names `Fiction`, `NonFiction`,
/// and `Reference`. Anything else is rejected at the parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Fiction,
    NonFiction,
    Reference,
}

impl Genre {
    /// All accepted genres, in declaration order
    pub const ALL: [Genre; 3] = [Genre::Fiction, Genre::NonFiction, Genre::Reference];

    /// Returns the canonical name of this genre
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::NonFiction => "NonFiction",
            Self::Reference => "Reference",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fiction" => Ok(Self::Fiction),
            "NonFiction" => Ok(Self::NonFiction),
            "Reference" => Ok(Self::Reference),
            _ => Err(DomainError::UnknownGenre {
                value: s.to_string(),
            }),
        }
    }
}

/// An immutable catalog entry
///
/// Constructed once and never mutated; copies are made with `Clone` and
/// preserve every field verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    genre: Genre,
    year_published: i32,
    page_count: u32,
}

impl Book {
    /// Creates a book with the given details
    ///
    /// Fails if the title is empty or blank. Year and page count are
    /// stored unchecked.
    pub fn new(
        title: impl Into<String>,
        genre: Genre,
        year_published: i32,
        page_count: u32,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::blank("title"));
        }

        Ok(Self {
            title,
            genre,
            year_published,
            page_count,
        })
    }

    /// Returns the title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the genre
    pub fn genre(&self) -> Genre {
        self.genre
    }

    /// Returns the year published
    pub fn year_published(&self) -> i32 {
        self.year_published
    }

    /// Returns the page count
    pub fn page_count(&self) -> u32 {
        self.page_count
    }
}

impl fmt::Display for Book {
    /// Renders all four fields: `<title> [<genre>, <year>, <pages> pages]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}, {}, {} pages]",
            self.title, self.genre, self.year_published, self.page_count
        )
    }
}

impl Validator for Book {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Title cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_genre_parse_exact_names() {
        assert_eq!("Fiction".parse::<Genre>().unwrap(), Genre::Fiction);
        assert_eq!("NonFiction".parse::<Genre>().unwrap(), Genre::NonFiction);
        assert_eq!("Reference".parse::<Genre>().unwrap(), Genre::Reference);
    }

    #[test]
    fn test_genre_parse_rejects_unknown() {
        for bad in ["", "fiction", "FICTION", "Non-Fiction", "nonfiction", "Sci-Fi", " Fiction"] {
            let err = bad.parse::<Genre>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "input {:?}", bad);
        }
    }

    #[test]
    fn test_genre_display_round_trip() {
        for genre in Genre::ALL {
            assert_eq!(genre.to_string().parse::<Genre>().unwrap(), genre);
        }
    }

    #[test]
    fn test_book_new() {
        let book = Book::new("Dune", Genre::Fiction, 1965, 412).unwrap();

        assert_eq!(book.title(), "Dune");
        assert_eq!(book.genre(), Genre::Fiction);
        assert_eq!(book.year_published(), 1965);
        assert_eq!(book.page_count(), 412);
    }

    #[test]
    fn test_book_new_rejects_empty_title() {
        let err = Book::new("", Genre::Fiction, 2000, 100).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_book_new_rejects_blank_title() {
        let err = Book::new("   ", Genre::Reference, 2000, 100).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_book_year_and_pages_unchecked() {
        // Negative years and zero pages are stored as given
        let book = Book::new("Scrolls", Genre::Reference, -300, 0).unwrap();
        assert_eq!(book.year_published(), -300);
        assert_eq!(book.page_count(), 0);
    }

    #[test]
    fn test_book_render() {
        let book = Book::new("The Great Gatsby", Genre::Fiction, 1925, 180).unwrap();
        assert_eq!(
            book.to_string(),
            "The Great Gatsby [Fiction, 1925, 180 pages]"
        );
    }

    #[test]
    fn test_book_clone_preserves_fields() {
        let book = Book::new("Sapiens", Genre::NonFiction, 2011, 443).unwrap();
        let copy = book.clone();

        assert_eq!(copy, book);
        assert_eq!(copy.title(), book.title());
        assert_eq!(copy.genre(), book.genre());
        assert_eq!(copy.year_published(), book.year_published());
        assert_eq!(copy.page_count(), book.page_count());
    }

    #[test]
    fn test_book_validation_success() {
        let book = Book::new("Clean Code", Genre::Reference, 2008, 431).unwrap();
        assert!(book.is_valid());
    }

    #[test]
    fn test_book_deserialized_with_blank_title_is_invalid() {
        // serde bypasses Book::new, so the Validator catches this instead
        let json = r#"{"title": "  ", "genre": "Fiction", "year_published": 2000, "page_count": 100}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert!(!book.is_valid());
    }

    #[test]
    fn test_book_deserialized_with_unknown_genre_fails() {
        let json = r#"{"title": "X", "genre": "Horror", "year_published": 2000, "page_count": 100}"#;
        assert!(serde_json::from_str::<Book>(json).is_err());
    }

    #[test]
    fn test_book_serde_round_trip() {
        let book = Book::new("Dune", Genre::Fiction, 1965, 412).unwrap();
        let json = serde_json::to_string(&book).unwrap();
        let back: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }
}
