//! # Book Commands
//!
//! One async flow per menu entry. Each flow collects its fields from the
//! console, runs the repository operation and prints the outcome.
//! Errors are returned to the shell, which prints them and goes back to
//! the menu.
//!
//! ## Field Rules
//! - Text fields are trimmed; the search keyword is used as typed
//! - Publisher and year are optional (blank → none)
//! - Quantity defaults to 0 when left blank
//! - Year and quantity must be whole numbers

use std::fmt;
use std::io::{BufRead, Write};

use libris_core::validation::{optional_text, parse_quantity, parse_year, validate_isbn};
use libris_core::{Book, NewBook};
use libris_db::{BookRepository, DbError};
use tracing::info;

use crate::error::ShellResult;
use crate::prompt::Console;

/// One-line rendering of a book record.
///
/// ```text
/// ID: 1, Title: Dune, Author: Frank Herbert, Publisher: Chilton, ISBN: 978-0441172719, Year: 1965, Quantity: 3
/// ```
pub struct BookLine<'a>(pub &'a Book);

impl fmt::Display for BookLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let book = self.0;
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Publisher: {}, ISBN: {}, Year: {}, Quantity: {}",
            book.id,
            book.title,
            book.author,
            book.publisher.as_deref().unwrap_or("-"),
            book.isbn,
            year_text(book.pub_year),
            book.quantity
        )
    }
}

fn year_text(year: Option<i64>) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Reads an ISBN and checks it is not blank.
fn prompt_isbn<R: BufRead, W: Write>(console: &mut Console<R, W>) -> ShellResult<String> {
    let isbn = console.prompt("ISBN: ")?.trim().to_string();
    validate_isbn(&isbn)?;
    Ok(isbn)
}

/// Menu 1: add a book.
pub async fn add_book<R: BufRead, W: Write>(
    books: &BookRepository,
    console: &mut Console<R, W>,
) -> ShellResult<()> {
    console.say("\n--- Add a book ---")?;

    let title = console.prompt("Title: ")?;
    let author = console.prompt("Author: ")?;
    let publisher = console.prompt("Publisher (optional): ")?;
    let isbn = console.prompt("ISBN: ")?;
    let year = console.prompt("Publication year (optional): ")?;
    let quantity = console.prompt("Quantity [0]: ")?;

    let new_book = NewBook {
        title: title.trim().to_string(),
        author: author.trim().to_string(),
        publisher: optional_text(&publisher),
        isbn: isbn.trim().to_string(),
        pub_year: parse_year(&year)?,
        quantity: parse_quantity(&quantity)?,
    };
    new_book.validate()?;

    let book = books.add(&new_book).await?;
    info!(id = book.id, isbn = %book.isbn, "Book added");

    console.say(format!("Book '{}' (ISBN: {}) added.", book.title, book.isbn))
}

/// Menu 2: list every book in insertion order.
pub async fn list_books<R: BufRead, W: Write>(
    books: &BookRepository,
    console: &mut Console<R, W>,
) -> ShellResult<()> {
    console.say("\n--- All books ---")?;

    let all = books.list_all().await?;
    if all.is_empty() {
        return console.say("No books in the library yet.");
    }

    for book in &all {
        console.say(BookLine(book))?;
    }
    Ok(())
}

/// Menu 3: substring search over title, author and ISBN.
pub async fn search_books<R: BufRead, W: Write>(
    books: &BookRepository,
    console: &mut Console<R, W>,
) -> ShellResult<()> {
    console.say("\n--- Search books ---")?;

    let keyword = console.prompt("Keyword (title, author or ISBN): ")?;
    let found = books.search(&keyword).await?;

    if found.is_empty() {
        return console.say(format!("No books found matching '{}'.", keyword));
    }

    console.say(format!("Found {} book(s):", found.len()))?;
    for book in &found {
        console.say(BookLine(book))?;
    }
    Ok(())
}

/// Menu 4: lend one copy.
pub async fn borrow_book<R: BufRead, W: Write>(
    books: &BookRepository,
    console: &mut Console<R, W>,
) -> ShellResult<()> {
    console.say("\n--- Borrow a book ---")?;

    let isbn = prompt_isbn(console)?;
    let remaining = books.borrow(&isbn).await?;
    info!(isbn = %isbn, remaining, "Book borrowed");

    console.say(format!(
        "Book (ISBN: {}) borrowed. Copies remaining: {}",
        isbn, remaining
    ))
}

/// Menu 5: take one copy back.
pub async fn return_book<R: BufRead, W: Write>(
    books: &BookRepository,
    console: &mut Console<R, W>,
) -> ShellResult<()> {
    console.say("\n--- Return a book ---")?;

    let isbn = prompt_isbn(console)?;
    let available = books.return_copy(&isbn).await?;
    info!(isbn = %isbn, available, "Book returned");

    console.say(format!(
        "Book (ISBN: {}) returned. Copies available: {}",
        isbn, available
    ))
}

/// Menu 6: edit title, author, publisher and year.
///
/// The record is looked up by exact ISBN and shown first. Each field is
/// then prompted with its current value; pressing Enter keeps it. The
/// stored row is always overwritten with the merged values.
pub async fn update_book<R: BufRead, W: Write>(
    books: &BookRepository,
    console: &mut Console<R, W>,
) -> ShellResult<()> {
    console.say("\n--- Update book details ---")?;

    let isbn = prompt_isbn(console)?;
    let book = books
        .get_by_isbn(&isbn)
        .await?
        .ok_or_else(|| DbError::not_found("Book", isbn.as_str()))?;

    console.say("Current record:")?;
    console.say(BookLine(&book))?;
    console.say("Enter new values (leave blank to keep the current value).")?;

    let mut update = book.as_update();

    if let Some(title) = console.prompt_with_default("title", &book.title)? {
        update.title = title;
    }
    if let Some(author) = console.prompt_with_default("author", &book.author)? {
        update.author = author;
    }
    let publisher = book.publisher.as_deref().unwrap_or("-");
    if let Some(publisher) = console.prompt_with_default("publisher", publisher)? {
        update.publisher = Some(publisher);
    }
    if let Some(year) = console.prompt_with_default("year", &year_text(book.pub_year))? {
        update.pub_year = parse_year(&year)?;
    }
    update.validate()?;

    books.update_fields(&book.isbn, &update).await?;
    info!(isbn = %book.isbn, "Book updated");

    console.say(format!("Book (ISBN: {}) updated.", book.isbn))
}

/// Menu 7: remove a book.
pub async fn delete_book<R: BufRead, W: Write>(
    books: &BookRepository,
    console: &mut Console<R, W>,
) -> ShellResult<()> {
    console.say("\n--- Delete a book ---")?;

    let isbn = prompt_isbn(console)?;
    books.delete(&isbn).await?;
    info!(isbn = %isbn, "Book deleted");

    console.say(format!("Book (ISBN: {}) deleted.", isbn))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_line_with_all_fields() {
        let book = Book {
            id: 3,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            publisher: Some("Chilton".to_string()),
            isbn: "978-0441172719".to_string(),
            pub_year: Some(1965),
            quantity: 2,
        };

        assert_eq!(
            BookLine(&book).to_string(),
            "ID: 3, Title: Dune, Author: Frank Herbert, Publisher: Chilton, \
             ISBN: 978-0441172719, Year: 1965, Quantity: 2"
        );
    }

    #[test]
    fn test_book_line_with_missing_optionals() {
        let book = Book {
            id: 1,
            title: "Untitled".to_string(),
            author: "Anon".to_string(),
            publisher: None,
            isbn: "X1".to_string(),
            pub_year: None,
            quantity: 0,
        };

        assert_eq!(
            BookLine(&book).to_string(),
            "ID: 1, Title: Untitled, Author: Anon, Publisher: -, ISBN: X1, Year: -, Quantity: 0"
        );
    }
}
