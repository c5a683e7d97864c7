//! Scripted sessions against a real on-disk store.

use std::io::Cursor;

use libris_cli::Shell;
use libris_core::NewBook;
use libris_db::{Database, DbConfig};
use tempfile::TempDir;

async fn open_store() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db = Database::new(DbConfig::new(dir.path().join("library.db")))
        .await
        .unwrap();
    (dir, db)
}

/// Runs one session with `script` as stdin and returns everything printed.
async fn run_script(db: &Database, script: &str) -> String {
    run_bytes(db, script.as_bytes()).await
}

async fn run_bytes(db: &Database, script: &[u8]) -> String {
    let mut shell = Shell::new(db.books(), Cursor::new(script.to_vec()), Vec::new());
    shell.run().await.unwrap();
    String::from_utf8(shell.into_output()).unwrap()
}

fn dune(quantity: i64) -> NewBook {
    NewBook {
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        publisher: Some("Chilton".to_string()),
        isbn: "978-0441172719".to_string(),
        pub_year: Some(1965),
        quantity,
    }
}

#[tokio::test]
async fn test_add_then_list() {
    let (_dir, db) = open_store().await;

    let script = "1\nThe Hobbit\nJ.R.R. Tolkien\nAllen & Unwin\n978-0261102217\n1937\n2\n\n2\n\n0\n";
    let output = run_script(&db, script).await;

    assert!(output.contains("Book 'The Hobbit' (ISBN: 978-0261102217) added."));
    assert!(output.contains(
        "ID: 1, Title: The Hobbit, Author: J.R.R. Tolkien, Publisher: Allen & Unwin, \
         ISBN: 978-0261102217, Year: 1937, Quantity: 2"
    ));
    assert!(output.contains("Goodbye!"));
    assert_eq!(db.books().count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_add_with_blank_optionals() {
    let (_dir, db) = open_store().await;

    let output = run_script(&db, "1\nUntitled\nAnon\n\nX1\n\n\n\n0\n").await;
    assert!(output.contains("added."));

    let book = db.books().get_by_isbn("X1").await.unwrap().unwrap();
    assert_eq!(book.publisher, None);
    assert_eq!(book.pub_year, None);
    assert_eq!(book.quantity, 0);
}

#[tokio::test]
async fn test_list_empty_library() {
    let (_dir, db) = open_store().await;

    let output = run_script(&db, "2\n\n0\n").await;
    assert!(output.contains("No books in the library yet."));
}

#[tokio::test]
async fn test_non_integer_year_is_rejected() {
    let (_dir, db) = open_store().await;

    let output = run_script(&db, "1\nDune\nFrank Herbert\n\n978-0441172719\nabc\n3\n\n0\n").await;

    assert!(output.contains("Error: Input error: year has invalid format"));
    assert_eq!(db.books().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_non_integer_quantity_is_rejected() {
    let (_dir, db) = open_store().await;

    let output = run_script(&db, "1\nT\nA\n\nI\n\nabc\n\n0\n").await;

    assert!(output.contains("Error: Input error: quantity has invalid format"));
    assert!(output.contains("Goodbye!"));
    assert_eq!(db.books().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_negative_quantity_is_rejected() {
    let (_dir, db) = open_store().await;

    let output = run_script(&db, "1\nT\nA\n\nI\n\n-3\n\n0\n").await;

    assert!(output.contains("Error: Input error: quantity must not be negative"));
    assert_eq!(db.books().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_invalid_utf8_line_does_not_end_session() {
    let (_dir, db) = open_store().await;
    db.books().add(&dune(1)).await.unwrap();

    let mut script = b"3\n".to_vec();
    script.extend_from_slice(&[0xff, 0xfe, b'\n']);
    script.extend_from_slice(b"\n2\n\n0\n");
    let output = run_bytes(&db, &script).await;

    assert!(output.contains("No books found matching '\u{FFFD}\u{FFFD}'."));
    assert!(output.contains("Title: Dune"));
    assert!(output.contains("Goodbye!"));
}

#[tokio::test]
async fn test_invalid_utf8_menu_choice_is_just_invalid() {
    let (_dir, db) = open_store().await;

    let output = run_bytes(&db, b"\xff\n\n0\n").await;

    assert!(output.contains("Invalid choice"));
    assert!(output.contains("Goodbye!"));
}

#[tokio::test]
async fn test_duplicate_isbn_is_reported() {
    let (_dir, db) = open_store().await;
    db.books().add(&dune(1)).await.unwrap();

    let output = run_script(&db, "1\nOther\nSomeone\n\n978-0441172719\n\n\n\n0\n").await;

    assert!(output.contains("Error: Duplicate isbn: '978-0441172719' already exists"));
    let stored = db.books().get_by_isbn("978-0441172719").await.unwrap().unwrap();
    assert_eq!(stored.title, "Dune");
}

#[tokio::test]
async fn test_search_hits_and_misses() {
    let (_dir, db) = open_store().await;
    db.books().add(&dune(1)).await.unwrap();

    let output = run_script(&db, "3\nHerbert\n\n3\nTolkien\n\n0\n").await;

    assert!(output.contains("Found 1 book(s):"));
    assert!(output.contains("Title: Dune"));
    assert!(output.contains("No books found matching 'Tolkien'."));
}

#[tokio::test]
async fn test_borrow_until_out_of_stock_then_return() {
    let (_dir, db) = open_store().await;
    db.books().add(&dune(1)).await.unwrap();

    let script = "4\n978-0441172719\n\n4\n978-0441172719\n\n5\n978-0441172719\n\n0\n";
    let output = run_script(&db, script).await;

    assert!(output.contains("borrowed. Copies remaining: 0"));
    assert!(output.contains("Error: Book 978-0441172719 is out of stock"));
    assert!(output.contains("returned. Copies available: 1"));

    let book = db.books().get_by_isbn("978-0441172719").await.unwrap().unwrap();
    assert_eq!(book.quantity, 1);
}

#[tokio::test]
async fn test_borrow_unknown_isbn() {
    let (_dir, db) = open_store().await;

    let output = run_script(&db, "4\nnope\n\n0\n").await;
    assert!(output.contains("Error: Book not found: nope"));
}

#[tokio::test]
async fn test_update_keeps_blank_fields() {
    let (_dir, db) = open_store().await;
    db.books().add(&dune(2)).await.unwrap();

    let output = run_script(&db, "6\n978-0441172719\n\nF. Herbert\n\n1966\n\n0\n").await;

    assert!(output.contains("Current record:"));
    assert!(output.contains("New title (current: Dune): "));
    assert!(output.contains("Book (ISBN: 978-0441172719) updated."));

    let book = db.books().get_by_isbn("978-0441172719").await.unwrap().unwrap();
    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "F. Herbert");
    assert_eq!(book.publisher.as_deref(), Some("Chilton"));
    assert_eq!(book.pub_year, Some(1966));
    assert_eq!(book.quantity, 2);
}

#[tokio::test]
async fn test_update_rejects_bad_year_and_keeps_record() {
    let (_dir, db) = open_store().await;
    db.books().add(&dune(2)).await.unwrap();

    let output = run_script(&db, "6\n978-0441172719\nNew Title\n\n\nsoon\n\n0\n").await;

    assert!(output.contains("Error: Input error: year has invalid format"));
    let book = db.books().get_by_isbn("978-0441172719").await.unwrap().unwrap();
    assert_eq!(book.title, "Dune");
}

#[tokio::test]
async fn test_update_unknown_isbn() {
    let (_dir, db) = open_store().await;

    let output = run_script(&db, "6\nmissing\n\n0\n").await;
    assert!(output.contains("Error: Book not found: missing"));
}

#[tokio::test]
async fn test_delete() {
    let (_dir, db) = open_store().await;
    db.books().add(&dune(1)).await.unwrap();

    let output = run_script(&db, "7\n978-0441172719\n\n7\n978-0441172719\n\n0\n").await;

    assert!(output.contains("Book (ISBN: 978-0441172719) deleted."));
    assert!(output.contains("Error: Book not found: 978-0441172719"));
    assert_eq!(db.books().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_invalid_choice_returns_to_menu() {
    let (_dir, db) = open_store().await;

    let output = run_script(&db, "9\n\nhello\n\n0\n").await;

    assert_eq!(output.matches("Invalid choice").count(), 2);
    assert!(output.contains("Goodbye!"));
}

#[tokio::test]
async fn test_end_of_input_ends_session() {
    let (_dir, db) = open_store().await;

    // Input stops in the middle of the add flow
    let output = run_script(&db, "1\nHalf a book\n").await;

    assert!(output.contains("Author: "));
    assert!(!output.contains("Goodbye!"));
    assert_eq!(db.books().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_missing_table_is_reported_and_shell_continues() {
    let dir = TempDir::new().unwrap();
    let db = Database::new(DbConfig::new(dir.path().join("library.db")).run_migrations(false))
        .await
        .unwrap();

    let output = run_script(&db, "2\n\n0\n").await;

    assert!(output.contains("Error: Query failed"));
    assert!(output.contains("Goodbye!"));
}
