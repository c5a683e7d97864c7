//! # Book Repository
//!
//! Database operations for books.
//!
//! ## Key Operations
//! - Insert with ISBN uniqueness
//! - Listing and keyword search
//! - Descriptive field updates
//! - Lending stock (borrow / return)
//! - Hard delete
//!
//! ## Stock Update Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Borrow Without a Race                                │
//! │                                                                         │
//! │  ❌ Read-then-write (two writers can both see quantity = 1)            │
//! │     SELECT quantity ...        → 1                                     │
//! │     UPDATE ... SET quantity = 0                                        │
//! │                                                                         │
//! │  ✅ Conditional delta (the guard lives in the WHERE clause)            │
//! │     UPDATE books SET quantity = quantity - 1                           │
//! │     WHERE isbn = ? AND quantity > 0                                    │
//! │     RETURNING quantity                                                 │
//! │                                                                         │
//! │  no row returned → someone else took the last copy → OutOfStock        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Keyword Search
//! `search` wraps the keyword as `%keyword%` and hands it to `LIKE` over
//! title, author and isbn. `%` and `_` typed by the user are not escaped, so
//! they keep their wildcard meaning.

use libris_core::{Book, BookUpdate, CoreError, NewBook};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

const ENTITY: &str = "Book";

/// Repository for book database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = BookRepository::new(pool);
///
/// let hits = repo.search("Tolkien").await?;
/// let remaining = repo.borrow("978-0261102217").await?;
/// ```
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    /// Creates a new BookRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookRepository { pool }
    }

    /// Inserts a new book.
    ///
    /// ## Returns
    /// * `Ok(Book)` - Inserted book with its store-assigned id
    /// * `Err(DbError::UniqueViolation)` - ISBN already exists
    pub async fn add(&self, book: &NewBook) -> DbResult<Book> {
        debug!(isbn = %book.isbn, "Inserting book");

        let result = sqlx::query(
            r#"
            INSERT INTO books (title, author, publisher, isbn, pub_year, quantity)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.publisher)
        .bind(&book.isbn)
        .bind(book.pub_year)
        .bind(book.quantity)
        .execute(&self.pool)
        .await
        .map_err(|err| match DbError::from(err) {
            DbError::UniqueViolation { .. } => DbError::duplicate("isbn", &book.isbn),
            other => other,
        })?;

        Ok(Book {
            id: result.last_insert_rowid(),
            title: book.title.clone(),
            author: book.author.clone(),
            publisher: book.publisher.clone(),
            isbn: book.isbn.clone(),
            pub_year: book.pub_year,
            quantity: book.quantity,
        })
    }

    /// Lists every book in insertion order.
    pub async fn list_all(&self) -> DbResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, publisher, isbn, pub_year, quantity
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = books.len(), "Listed books");
        Ok(books)
    }

    /// Finds books whose title, author or ISBN contains `keyword`.
    ///
    /// Matching is case-sensitive (the pool turns on `case_sensitive_like`).
    /// An empty keyword matches every book.
    ///
    /// ## Example
    /// ```rust,ignore
    /// // Matches author "J.R.R. Tolkien"
    /// let books = repo.search("Tolkien").await?;
    /// ```
    pub async fn search(&self, keyword: &str) -> DbResult<Vec<Book>> {
        debug!(keyword = %keyword, "Searching books");

        let pattern = format!("%{}%", keyword);

        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, publisher, isbn, pub_year, quantity
            FROM books
            WHERE title LIKE ? OR author LIKE ? OR isbn LIKE ?
            ORDER BY id
            "#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = books.len(), "Search returned books");
        Ok(books)
    }

    /// Gets a book by its exact ISBN.
    ///
    /// ## Returns
    /// * `Ok(Some(Book))` - Book found
    /// * `Ok(None)` - No book with that ISBN
    pub async fn get_by_isbn(&self, isbn: &str) -> DbResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, publisher, isbn, pub_year, quantity
            FROM books
            WHERE isbn = ?
            "#,
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    /// Overwrites title, author, publisher and year of the book with `isbn`.
    ///
    /// All four fields are written even if they equal the stored values.
    /// ISBN and quantity are left untouched.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - No book with that ISBN
    pub async fn update_fields(&self, isbn: &str, update: &BookUpdate) -> DbResult<()> {
        debug!(isbn = %isbn, "Updating book");

        let result = sqlx::query(
            r#"
            UPDATE books SET
                title = ?,
                author = ?,
                publisher = ?,
                pub_year = ?
            WHERE isbn = ?
            "#,
        )
        .bind(&update.title)
        .bind(&update.author)
        .bind(&update.publisher)
        .bind(update.pub_year)
        .bind(isbn)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(ENTITY, isbn));
        }

        Ok(())
    }

    /// Lends one copy of the book with `isbn`.
    ///
    /// ## Returns
    /// * `Ok(remaining)` - Copies left after the loan, as written by the update
    /// * `Err(DbError::NotFound)` - No book with that ISBN
    /// * `Err(DbError::Rule(CoreError::OutOfStock))` - Quantity is zero
    pub async fn borrow(&self, isbn: &str) -> DbResult<i64> {
        debug!(isbn = %isbn, "Borrowing book");

        let book = self
            .get_by_isbn(isbn)
            .await?
            .ok_or_else(|| DbError::not_found(ENTITY, isbn))?;

        book.ensure_lendable()?;

        let remaining: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE books
            SET quantity = quantity - 1
            WHERE isbn = ? AND quantity > 0
            RETURNING quantity
            "#,
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;

        // The last copy went between the lookup and the update
        remaining.ok_or_else(|| {
            CoreError::OutOfStock {
                isbn: isbn.to_string(),
            }
            .into()
        })
    }

    /// Puts one copy of the book with `isbn` back on the shelf.
    ///
    /// Returning increments until the quantity reaches `i64::MAX`; past
    /// that SQLite would store the sum as REAL, so the row is left alone.
    ///
    /// ## Returns
    /// * `Ok(quantity)` - Copies available after the return
    /// * `Err(DbError::NotFound)` - No book with that ISBN
    /// * `Err(DbError::Rule(CoreError::StockAtLimit))` - Quantity is `i64::MAX`
    pub async fn return_copy(&self, isbn: &str) -> DbResult<i64> {
        debug!(isbn = %isbn, "Returning book");

        let quantity: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE books
            SET quantity = quantity + 1
            WHERE isbn = ? AND quantity < ?
            RETURNING quantity
            "#,
        )
        .bind(isbn)
        .bind(i64::MAX)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(quantity) = quantity {
            return Ok(quantity);
        }

        match self.get_by_isbn(isbn).await? {
            Some(_) => Err(CoreError::StockAtLimit {
                isbn: isbn.to_string(),
            }
            .into()),
            None => Err(DbError::not_found(ENTITY, isbn)),
        }
    }

    /// Deletes the book with `isbn`.
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotFound)` - No book with that ISBN
    pub async fn delete(&self, isbn: &str) -> DbResult<()> {
        debug!(isbn = %isbn, "Deleting book");

        let result = sqlx::query("DELETE FROM books WHERE isbn = ?")
            .bind(isbn)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(ENTITY, isbn));
        }

        Ok(())
    }

    /// Counts stored books.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
