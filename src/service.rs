use anyhow::Result;

use crate::models::{AddBookInput, Book, BookId, UpdateBookInput};
use crate::store::BookStore;

/// Book use-cases on top of a [`BookStore`].
///
/// Update and delete look the book up first, so callers can tell "not found"
/// apart from "found and changed" without inspecting store row counts.
pub struct BookService<S> {
    store: S,
}

impl<S: BookStore> BookService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    pub fn list_books(&self) -> Result<Vec<Book>> {
        let books = self.store.find_all()?;
        tracing::debug!("Listed {} books", books.len());
        Ok(books)
    }

    /// Returns `None` for id 0 without touching the store.
    pub fn get_book(&self, id: BookId) -> Result<Option<Book>> {
        if id == 0 {
            return Ok(None);
        }
        self.store.find_by_id(id)
    }

    pub fn add_book(&self, input: AddBookInput) -> Result<Book> {
        let book = self.store.create(&input)?;
        tracing::info!(id = book.id, title = %book.title, "Added book");
        Ok(book)
    }

    /// Applies the supplied fields and returns the reloaded book, or `None`
    /// when no book has this id. Nothing is written in the `None` case.
    pub fn update_book(&self, id: BookId, input: UpdateBookInput) -> Result<Option<Book>> {
        if self.get_book(id)?.is_none() {
            tracing::debug!("Update skipped, book {} not found", id);
            return Ok(None);
        }

        // The row can vanish between the check and the write; the reload below
        // then reports it as missing.
        if !input.is_empty() {
            let changed = self.store.update_by_id(id, &input)?;
            tracing::debug!("Updated book {} ({} row(s))", id, changed);
        }

        self.get_book(id)
    }

    /// Returns `false` when no book has this id.
    pub fn delete_book(&self, id: BookId) -> Result<bool> {
        if self.get_book(id)?.is_none() {
            tracing::debug!("Delete skipped, book {} not found", id);
            return Ok(false);
        }

        let removed = self.store.delete_by_id(id)?;
        tracing::info!(id, removed, "Deleted book");
        Ok(true)
    }
}
