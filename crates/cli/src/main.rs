use anyhow::{Context, Result};
use clap::{Arg, Command};

mod commands;

fn build_cli() -> Command {
    Command::new("bookery")
        .version("0.1.0")
        .about("Library catalog toolkit")
        .arg(
            Arg::new("catalog")
                .short('c')
                .long("catalog")
                .value_name("PATH")
                .help("Path to a JSON catalog file (defaults to the built-in sample catalog)")
                .global(true),
        )
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .value_name("NAME")
                .help("Library name")
                .default_value("City Library")
                .global(true),
        )
        .subcommand(
            Command::new("list")
                .about("List all books in the catalog")
                .arg(
                    Arg::new("sort")
                        .short('s')
                        .long("sort")
                        .value_name("FIELD")
                        .help("Sort order (pages is descending)")
                        .value_parser(["title", "year", "pages"]),
                ),
        )
        .subcommand(Command::new("stats").about("Show catalog statistics"))
        .subcommand(
            Command::new("recommend")
                .about("Print a librarian's recommendation")
                .arg(
                    Arg::new("librarian")
                        .short('l')
                        .long("librarian")
                        .value_name("NAME")
                        .help("Librarian name")
                        .default_value("Alex"),
                ),
        )
        .subcommand(
            Command::new("shelf")
                .about("Show the smallest and largest catalog entry by a field")
                .arg(
                    Arg::new("by")
                        .short('b')
                        .long("by")
                        .value_name("FIELD")
                        .help("Field to compare")
                        .value_parser(["title", "pages"])
                        .default_value("pages"),
                ),
        )
        .subcommand(
            Command::new("checkout")
                .about("Print a checkout receipt for a book")
                .arg(
                    Arg::new("title")
                        .required(true)
                        .value_name("TITLE")
                        .help("Title of the book to check out"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export the catalog as JSON")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Output file path")
                        .default_value("catalog_export.json"),
                ),
        )
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let matches = build_cli().get_matches();

    let catalog_path = matches.get_one::<String>("catalog").map(|s| s.as_str());
    let name = matches
        .get_one::<String>("name")
        .map(|s| s.as_str())
        .unwrap_or("City Library");

    let library = commands::open_library(name, catalog_path).context("Failed to open catalog")?;

    match matches.subcommand() {
        Some(("list", sub_matches)) => commands::list_books(&library, sub_matches),
        Some(("stats", _)) => commands::show_stats(&library),
        Some(("recommend", sub_matches)) => commands::recommend(&library, sub_matches),
        Some(("shelf", sub_matches)) => commands::shelf_extremes(&library, sub_matches),
        Some(("checkout", sub_matches)) => commands::checkout(&library, sub_matches),
        Some(("export", sub_matches)) => commands::export_catalog(&library, sub_matches),
        _ => {
            build_cli().print_help()?;
            Ok(())
        }
    }
}
