//! Core domain types for Bookery
//!
//! The entity layer: validated `Book` values, the `Genre` vocabulary,
//! and the domain error type shared by the higher-level crates.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{DomainError, ErrorKind, Result};
pub use types::{Book, Genre, Validator};
