//! The Librarian role

use crate::error::{CatalogError, Result};
use crate::library::Library;
use bookery_core::DomainError;

/// A librarian who works at exactly one library
///
/// Bound to the owning library by an explicit shared reference at
/// construction time; reads the owner's name and catalog, never mutates
/// them.
#[derive(Debug)]
pub struct Librarian<'a> {
    library: &'a Library,
    name: String,
}

impl<'a> Librarian<'a> {
    /// Constructs a librarian bound to `library`
    ///
    /// Fails if the name is empty or blank.
    pub fn new(library: &'a Library, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::blank("librarian name").into());
        }

        Ok(Self { library, name })
    }

    /// Returns the librarian's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recommends the first book in the owner's catalog
    ///
    /// An empty catalog at call time is surfaced as an error, never
    /// defaulted away.
    pub fn recommend(&self) -> Result<String> {
        let first = self
            .library
            .catalog()
            .first()
            .ok_or_else(|| CatalogError::EmptyCatalog {
                library: self.library.name().to_string(),
            })?;

        Ok(format!(
            "{} at {} recommends: {}",
            self.name,
            self.library.name(),
            first
        ))
    }
}
