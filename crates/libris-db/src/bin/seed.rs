//! # Sample Data Seeder
//!
//! Populates a store with a shelf of well-known books for development.
//!
//! ## Usage
//! ```bash
//! # Seed every sample book into ./library.db
//! cargo run -p libris-db --bin seed
//!
//! # Seed only the first 5 samples
//! cargo run -p libris-db --bin seed -- --count 5
//!
//! # Specify database path
//! cargo run -p libris-db --bin seed -- --db ./data/library.db
//! ```
//!
//! ISBNs already in the store are skipped, so running the seeder twice is
//! harmless.

use libris_core::NewBook;
use libris_db::{Database, DbConfig, DbError};
use std::env;
use std::process;

/// (title, author, publisher, isbn, year)
const SAMPLES: &[(&str, &str, Option<&str>, &str, Option<i64>)] = &[
    ("The Hobbit", "J.R.R. Tolkien", Some("Allen & Unwin"), "978-0261102217", Some(1937)),
    ("The Fellowship of the Ring", "J.R.R. Tolkien", Some("Allen & Unwin"), "978-0261102354", Some(1954)),
    ("Dune", "Frank Herbert", Some("Chilton Books"), "978-0441013593", Some(1965)),
    ("Nineteen Eighty-Four", "George Orwell", Some("Secker & Warburg"), "978-0451524935", Some(1949)),
    ("Pride and Prejudice", "Jane Austen", Some("T. Egerton"), "978-0141439518", Some(1813)),
    ("The Left Hand of Darkness", "Ursula K. Le Guin", Some("Ace Books"), "978-0441478125", Some(1969)),
    ("Beloved", "Toni Morrison", Some("Alfred A. Knopf"), "978-1400033416", Some(1987)),
    ("The Name of the Rose", "Umberto Eco", Some("Bompiani"), "978-0156001311", Some(1980)),
    ("Structure and Interpretation of Computer Programs", "Harold Abelson", Some("MIT Press"), "978-0262510875", Some(1985)),
    ("The Rust Programming Language", "Steve Klabnik", Some("No Starch Press"), "978-1718503106", Some(2019)),
    ("Things Fall Apart", "Chinua Achebe", Some("William Heinemann"), "978-0385474542", Some(1958)),
    ("Untitled Manuscript", "Anonymous", None, "000-0000000001", None),
];

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Seed { count: usize, db_path: String },
}

/// Parses `--count`, `--db` and `--help`. Unknown flags are ignored.
fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut count: usize = SAMPLES.len();
    let mut db_path = String::from("./library.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| format!("{} needs a number", args[i]))?;
                count = value
                    .parse()
                    .map_err(|_| format!("invalid count '{}': expected a whole number", value))?;
                i += 1;
            }
            "--db" | "-d" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| format!("{} needs a path", args[i]))?;
                db_path = value.clone();
                i += 1;
            }
            "--help" | "-h" => return Ok(Command::Help),
            _ => {}
        }
        i += 1;
    }

    Ok(Command::Seed { count, db_path })
}

fn print_usage() {
    println!("Libris Sample Data Seeder");
    println!();
    println!("Usage: seed [OPTIONS]");
    println!();
    println!("Options:");
    println!(
        "  -c, --count <N>    Number of sample books to add (default: {})",
        SAMPLES.len()
    );
    println!("  -d, --db <PATH>    Database file path (default: ./library.db)");
    println!("  -h, --help         Show this help message");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let (count, db_path) = match parse_args(&args) {
        Ok(Command::Seed { count, db_path }) => (count, db_path),
        Ok(Command::Help) => {
            print_usage();
            return Ok(());
        }
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("Run with --help for usage.");
            process::exit(2);
        }
    };

    println!("Libris Sample Data Seeder");
    println!("=========================");
    println!("Database: {}", db_path);
    println!("Books:    {}", count.min(SAMPLES.len()));
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database, schema ready");

    let mut added = 0;
    let mut skipped = 0;

    for (index, &(title, author, publisher, isbn, pub_year)) in
        SAMPLES.iter().take(count).enumerate()
    {
        let book = NewBook {
            title: title.to_string(),
            author: author.to_string(),
            publisher: publisher.map(str::to_string),
            isbn: isbn.to_string(),
            pub_year,
            // Vary stock so borrow/return have something to work with
            quantity: (index % 4) as i64,
        };

        match db.books().add(&book).await {
            Ok(_) => added += 1,
            Err(DbError::UniqueViolation { .. }) => skipped += 1,
            Err(e) => {
                eprintln!("Failed to insert {}: {}", book.isbn, e);
            }
        }
    }

    println!();
    println!("✓ Added {} books ({} already present)", added, skipped);
    println!("  Store now holds {} books", db.books().count().await?);

    db.close().await;
    Ok(())
}
