use anyhow::{Context, Result};
use bookery_catalog::{io, stats, CatalogError, Librarian, Library};
use bookery_core::{Book, DomainError, Genre};
use bookery_shelf::Shelf;
use clap::ArgMatches;
use console::style;
use log::info;
use std::fmt;

/// Opens the library from a catalog file, or the built-in sample
pub fn open_library(name: &str, catalog_path: Option<&str>) -> Result<Library> {
    let books = match catalog_path {
        Some(path) => io::load_books(path)
            .with_context(|| format!("Failed to load catalog from {}", path))?,
        None => {
            info!("No catalog file given, using the built-in sample");
            sample_books()?
        }
    };

    Ok(Library::new(name, &books)?)
}

/// The catalog the demo runs on when no file is given
fn sample_books() -> Result<Vec<Book>, DomainError> {
    Ok(vec![
        Book::new("The Great Gatsby", Genre::Fiction, 1925, 180)?,
        Book::new("Thinking, Fast & Slow", Genre::NonFiction, 2011, 499)?,
        Book::new("Clean Code", Genre::Reference, 2008, 431)?,
        Book::new("Dune", Genre::Fiction, 1965, 412)?,
        Book::new("Sapiens", Genre::NonFiction, 2011, 443)?,
        Book::new("The Pragmatic Programmer", Genre::Reference, 1999, 352)?,
    ])
}

/// List all books in the catalog
pub fn list_books(library: &Library, matches: &ArgMatches) -> Result<()> {
    let sort = matches.get_one::<String>("sort").map(|s| s.as_str());
    let books = sorted_for_display(library.catalog(), sort);

    if books.is_empty() {
        println!("No books in catalog.");
        return Ok(());
    }

    println!(
        "\n{} Books in {}",
        style(books.len()).bold().cyan(),
        library.name()
    );
    println!("{}", "=".repeat(80));

    for book in &books {
        println!("{}", book);
    }

    Ok(())
}

/// Show catalog statistics
pub fn show_stats(library: &Library) -> Result<()> {
    let summary = stats::CatalogSummary::from_books(library.catalog());

    println!("\n{}", style("Catalog Statistics").bold().cyan());
    println!("{}", "=".repeat(80));
    println!("{}", summary);

    Ok(())
}

/// Print a librarian's recommendation
pub fn recommend(library: &Library, matches: &ArgMatches) -> Result<()> {
    let name = matches
        .get_one::<String>("librarian")
        .map(|s| s.as_str())
        .unwrap_or("Alex");

    let librarian = Librarian::new(library, name)?;
    let line = librarian.recommend().context("No books to recommend")?;

    println!("{}", line);

    Ok(())
}

/// Show the smallest and largest catalog entry by a field
pub fn shelf_extremes(library: &Library, matches: &ArgMatches) -> Result<()> {
    let by = matches
        .get_one::<String>("by")
        .map(|s| s.as_str())
        .unwrap_or("pages");

    println!("\n{} by {}", style("Shelf extrema").bold().cyan(), by);
    println!("{}", "=".repeat(80));

    match by {
        "title" => {
            let shelf: Shelf<String> = library
                .catalog()
                .iter()
                .map(|book| book.title().to_string())
                .collect();
            print_extremes(&shelf)
        }
        _ => {
            let shelf: Shelf<u32> = library
                .catalog()
                .iter()
                .map(|book| book.page_count())
                .collect();
            print_extremes(&shelf)
        }
    }
}

/// Print a checkout receipt for a book
pub fn checkout(library: &Library, matches: &ArgMatches) -> Result<()> {
    let title = matches
        .get_one::<String>("title")
        .ok_or_else(|| anyhow::anyhow!("Title is required"))?;

    let book = library
        .catalog()
        .iter()
        .find(|book| book.title() == title)
        .ok_or_else(|| CatalogError::BookNotFound {
            title: title.clone(),
        })?;

    // Receipt formatting stays local to the checkout flow
    let receipt = |lib: &Library, book: &Book| {
        format!(
            "Library : {}\nBook    : {}\nYear    : {}",
            lib.name(),
            book.title(),
            book.year_published()
        )
    };

    println!("{}", receipt(library, book));
    println!("{} Checked out '{}'", style("✓").green().bold(), book.title());

    Ok(())
}

/// Export the catalog as JSON
pub fn export_catalog(library: &Library, matches: &ArgMatches) -> Result<()> {
    let output = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("catalog_export.json");

    io::save_books(output, library.catalog())
        .with_context(|| format!("Failed to write {}", output))?;

    println!(
        "{} Exported {} books to {}",
        style("✓").green().bold(),
        library.catalog().len(),
        output
    );

    Ok(())
}

fn sorted_for_display(books: &[Book], sort: Option<&str>) -> Vec<Book> {
    let mut books = books.to_vec();

    match sort {
        Some("title") => books.sort_by(|a, b| a.title().cmp(b.title())),
        Some("year") => books.sort_by(|a, b| a.year_published().cmp(&b.year_published())),
        // Largest page count first
        Some("pages") => books.sort_by(|a, b| b.page_count().cmp(&a.page_count())),
        _ => {}
    }

    books
}

fn print_extremes<T: Ord + fmt::Display>(shelf: &Shelf<T>) -> Result<()> {
    println!("  Smallest : {}", shelf.smallest().context("Shelf is empty")?);
    println!("  Largest  : {}", shelf.largest().context("Shelf is empty")?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookery_core::Validator;

    #[test]
    fn test_sample_books_are_valid() {
        let books = sample_books().unwrap();
        assert_eq!(books.len(), 6);
        assert!(books.iter().all(|book| book.is_valid()));
    }

    #[test]
    fn test_open_library_defaults_to_sample() {
        let library = open_library("City Library", None).unwrap();
        assert_eq!(library.name(), "City Library");
        assert_eq!(library.catalog().len(), 6);
    }

    #[test]
    fn test_open_library_from_exported_file() {
        let library = open_library("City Library", None).unwrap();

        let file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        io::save_books(file.path(), library.catalog()).unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let reloaded = open_library("Branch Library", Some(&path)).unwrap();

        assert_eq!(reloaded.name(), "Branch Library");
        assert_eq!(reloaded.catalog(), library.catalog());
    }

    #[test]
    fn test_sorted_for_display_by_pages_is_descending() {
        let books = sample_books().unwrap();
        let sorted = sorted_for_display(&books, Some("pages"));

        assert_eq!(sorted[0].title(), "Thinking, Fast & Slow");
        assert_eq!(sorted.last().unwrap().title(), "The Great Gatsby");
    }

    #[test]
    fn test_sorted_for_display_by_title() {
        let books = sample_books().unwrap();
        let sorted = sorted_for_display(&books, Some("title"));

        assert_eq!(sorted[0].title(), "Clean Code");
    }

    #[test]
    fn test_sorted_for_display_unsorted_keeps_insertion_order() {
        let books = sample_books().unwrap();
        let unsorted = sorted_for_display(&books, None);

        assert_eq!(unsorted, books);
    }

    #[test]
    fn test_shelf_extremes_over_sample_pages() {
        let books = sample_books().unwrap();
        let shelf: Shelf<u32> = books.iter().map(|book| book.page_count()).collect();

        assert_eq!(shelf.smallest(), Ok(&180));
        assert_eq!(shelf.largest(), Ok(&499));
    }
}
