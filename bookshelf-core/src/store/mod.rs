//! Storage abstraction for books.
//!
//! The service layer only ever talks to a [`BookStore`]. The SQLite
//! [`Database`](crate::db::Database) is the production implementation;
//! [`MemoryStore`] backs tests and throwaway servers.

mod memory;

pub use memory::MemoryStore;

use anyhow::Result;

use crate::models::{AddBookInput, Book, BookId, UpdateBookInput};

pub trait BookStore: Send + Sync {
    /// Every stored book, in store order.
    fn find_all(&self) -> Result<Vec<Book>>;

    fn find_by_id(&self, id: BookId) -> Result<Option<Book>>;

    /// Persists a new book and returns it with its assigned id.
    fn create(&self, input: &AddBookInput) -> Result<Book>;

    /// Applies the supplied fields, returning the number of affected rows.
    fn update_by_id(&self, id: BookId, input: &UpdateBookInput) -> Result<usize>;

    /// Removes the book, returning the number of affected rows.
    fn delete_by_id(&self, id: BookId) -> Result<usize>;
}
