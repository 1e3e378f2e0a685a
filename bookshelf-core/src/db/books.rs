use anyhow::Result;
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};

use super::Database;
use crate::models::{AddBookInput, Book, BookId, UpdateBookInput};
use crate::store::BookStore;

const BOOK_COLUMNS: &str = "id, title, author, genre";

fn book_from_row(row: &Row) -> rusqlite::Result<Book> {
    let genre: String = row.get(3)?;
    let genre = serde_json::from_str(&genre)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        genre,
    })
}

impl BookStore for Database {
    fn find_all(&self) -> Result<Vec<Book>> {
        self.with_connection(|conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT {BOOK_COLUMNS} FROM books ORDER BY id"))?;
            let books = stmt
                .query_map([], book_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(books)
        })
    }

    fn find_by_id(&self, id: BookId) -> Result<Option<Book>> {
        self.with_connection(|conn| {
            let book = conn
                .query_row(
                    &format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = ?1"),
                    params![id],
                    book_from_row,
                )
                .optional()?;
            Ok(book)
        })
    }

    fn create(&self, input: &AddBookInput) -> Result<Book> {
        let genre = serde_json::to_string(&input.genre)?;

        self.with_connection(|conn| {
            conn.execute(
                "INSERT INTO books (title, author, genre) VALUES (?1, ?2, ?3)",
                params![input.title, input.author, genre],
            )?;
            let id = conn.last_insert_rowid();
            tracing::debug!("Inserted book row {}", id);

            Ok(Book {
                id,
                title: input.title.clone(),
                author: input.author.clone(),
                genre: input.genre.clone(),
            })
        })
    }

    fn update_by_id(&self, id: BookId, input: &UpdateBookInput) -> Result<usize> {
        let genre = input.genre.as_ref().map(serde_json::to_string).transpose()?;

        self.with_connection(|conn| {
            let changed = conn.execute(
                "UPDATE books
                 SET
                    title = COALESCE(?2, title),
                    author = COALESCE(?3, author),
                    genre = COALESCE(?4, genre)
                 WHERE id = ?1",
                params![id, input.title, input.author, genre],
            )?;
            Ok(changed)
        })
    }

    fn delete_by_id(&self, id: BookId) -> Result<usize> {
        self.with_connection(|conn| {
            let changed = conn.execute("DELETE FROM books WHERE id = ?1", params![id])?;
            Ok(changed)
        })
    }
}
