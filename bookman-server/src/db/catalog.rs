//! Catalog operations - the data-access layer.
//!
//! Four operations against the books table: search/list, fetch text
//! body, bulk insert, metadata update. The `Catalog` trait is the seam
//! handlers are written against; `PgCatalog` is the PostgreSQL
//! implementation.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use thiserror::Error;

use bookman_core::{Book, FullBook, UploadedFile};

/// List all books, sorted by name. Rank is meaningless here and pinned
/// to zero.
const LIST_SQL: &str = r#"
SELECT id, name, author, 0.0::float8 AS rank
FROM books
ORDER BY name
"#;

/// Match name, author, and body against the query, sorted by
/// descending relevance.
const SEARCH_SQL: &str = r#"
SELECT id, name, author,
       ts_rank(to_tsvector('english', name || ' ' || author || ' ' || body),
               websearch_to_tsquery('english', $1))::float8 AS rank
FROM books
WHERE to_tsvector('english', name || ' ' || author || ' ' || body)
      @@ websearch_to_tsquery('english', $1)
ORDER BY rank DESC
"#;

const TEXT_SQL: &str = "SELECT id, name, author, body FROM books WHERE id = $1";

const UPLOAD_SQL: &str = "INSERT INTO books (name, body) VALUES ($1, $2)";

const EDIT_SQL: &str = "UPDATE books SET name = $2, author = $3 WHERE id = $1";

/// Catalog error type
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("book {id} not found")]
    NotFound { id: i32 },
}

/// Data-access contract for the book catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// List or search books.
    ///
    /// An empty query returns every book ordered by name; a non-empty
    /// query returns matching books ordered by descending rank. Zero
    /// matches yield an empty vector, never an error.
    async fn search(&self, q: &str) -> Result<Vec<Book>, CatalogError>;

    /// Full text body of the given book.
    async fn body(&self, id: i32) -> Result<String, CatalogError>;

    /// Insert the given files as new books inside one transaction.
    ///
    /// Any single insert failure rolls back the whole batch. Empty
    /// input commits a no-op transaction.
    async fn upload(&self, files: Vec<UploadedFile>) -> Result<(), CatalogError>;

    /// Set the name and author of the given book.
    ///
    /// Editing a nonexistent id is a silent no-op success: zero rows
    /// affected, no error.
    async fn edit(&self, id: i32, name: &str, author: &str) -> Result<(), CatalogError>;
}

/// PostgreSQL-backed catalog.
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn book_from_row(row: &PgRow) -> Result<Book, sqlx::Error> {
    Ok(Book {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        author: row.try_get("author")?,
        rank: row.try_get("rank")?,
    })
}

fn full_book_from_row(row: &PgRow) -> Result<FullBook, sqlx::Error> {
    Ok(FullBook {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        author: row.try_get("author")?,
        body: row.try_get("body")?,
    })
}

#[async_trait]
impl Catalog for PgCatalog {
    async fn search(&self, q: &str) -> Result<Vec<Book>, CatalogError> {
        let rows = if q.is_empty() {
            sqlx::query(LIST_SQL).fetch_all(&self.pool).await?
        } else {
            sqlx::query(SEARCH_SQL).bind(q).fetch_all(&self.pool).await?
        };

        let books = rows
            .iter()
            .map(book_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(books)
    }

    async fn body(&self, id: i32) -> Result<String, CatalogError> {
        let row = sqlx::query(TEXT_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(CatalogError::NotFound { id })?;

        let book = full_book_from_row(&row)?;
        Ok(book.body)
    }

    async fn upload(&self, files: Vec<UploadedFile>) -> Result<(), CatalogError> {
        let mut tx = self.pool.begin().await?;

        for file in &files {
            let result = sqlx::query(UPLOAD_SQL)
                .bind(&file.name)
                .bind(&file.body)
                .execute(&mut *tx)
                .await;

            if let Err(err) = result {
                // the original insert error is what the caller gets; a
                // failed rollback is only logged
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "rollback after failed insert also failed");
                }
                return Err(err.into());
            }
        }

        tx.commit().await?;
        Ok(())
    }

    async fn edit(&self, id: i32, name: &str, author: &str) -> Result<(), CatalogError> {
        let result = sqlx::query(EDIT_SQL)
            .bind(id)
            .bind(name)
            .bind(author)
            .execute(&self.pool)
            .await?;

        // unknown ids affect zero rows and still succeed
        tracing::debug!(id, rows = result.rows_affected(), "book edited");
        Ok(())
    }
}
