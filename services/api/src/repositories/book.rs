//! Book repository for database operations

use anyhow::Result;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::models::{Book, NewBook, UpdateBook};

/// Book repository
#[derive(Clone)]
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    /// Create a new book repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new book
    pub async fn create(&self, new_book: &NewBook) -> Result<Book> {
        info!("Creating new book: {}", new_book.title);

        let row = sqlx::query(
            r#"
            INSERT INTO books (title, author, publish_year, image)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, author, publish_year, image, created_at, updated_at
            "#,
        )
        .bind(&new_book.title)
        .bind(&new_book.author)
        .bind(&new_book.publish_year)
        .bind(&new_book.image)
        .fetch_one(&self.pool)
        .await?;

        let book = Book {
            id: row.get("id"),
            title: row.get("title"),
            author: row.get("author"),
            publish_year: row.get("publish_year"),
            image: row.get("image"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        };

        Ok(book)
    }

    /// Get all books, store default order
    pub async fn find_all(&self) -> Result<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, author, publish_year, image, created_at, updated_at
            FROM books
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let books = rows
            .into_iter()
            .map(|row| Book {
                id: row.get("id"),
                title: row.get("title"),
                author: row.get("author"),
                publish_year: row.get("publish_year"),
                image: row.get("image"),
                created_at: row.get("created_at"),
                updated_at: row.get("updated_at"),
            })
            .collect();

        Ok(books)
    }

    /// Find a book by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, author, publish_year, image, created_at, updated_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let book = Book {
                    id: row.get("id"),
                    title: row.get("title"),
                    author: row.get("author"),
                    publish_year: row.get("publish_year"),
                    image: row.get("image"),
                    created_at: row.get("created_at"),
                    updated_at: row.get("updated_at"),
                };
                Ok(Some(book))
            }
            None => Ok(None),
        }
    }

    /// Update a book and return the updated record, or None if it is gone
    pub async fn update(&self, id: Uuid, changes: &UpdateBook) -> Result<Option<Book>> {
        info!("Updating book: {}", id);

        let row = sqlx::query(
            r#"
            UPDATE books
            SET title = $2, author = $3, publish_year = $4, image = $5, updated_at = now()
            WHERE id = $1
            RETURNING id, title, author, publish_year, image, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.author)
        .bind(&changes.publish_year)
        .bind(&changes.image)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let book = Book {
                    id: row.get("id"),
                    title: row.get("title"),
                    author: row.get("author"),
                    publish_year: row.get("publish_year"),
                    image: row.get("image"),
                    created_at: row.get("created_at"),
                    updated_at: row.get("updated_at"),
                };
                Ok(Some(book))
            }
            None => Ok(None),
        }
    }

    /// Delete a book by ID, returning whether a row was removed
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        info!("Deleting book: {}", id);

        let result = sqlx::query(
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
