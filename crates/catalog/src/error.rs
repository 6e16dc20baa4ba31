use bookery_core::{DomainError, ErrorKind};
use thiserror::Error;

/// Errors raised by the catalog layer
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// First-book lookup on a library with no books
    #[error("Catalog of '{library}' is empty")]
    EmptyCatalog { library: String },

    /// Title lookup found nothing
    #[error("Book not found: {title}")]
    BookNotFound { title: String },

    /// A catalog file held a book that fails domain validation
    #[error("Invalid book in catalog file: {reasons}")]
    InvalidBook { reasons: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog file error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// Returns the classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) => err.kind(),
            Self::EmptyCatalog { .. } | Self::BookNotFound { .. } => ErrorKind::OutOfRange,
            Self::InvalidBook { .. } | Self::Io(_) | Self::Json(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Convenience type alias for Results using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;
