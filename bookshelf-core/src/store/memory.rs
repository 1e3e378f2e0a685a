use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use anyhow::{anyhow, Result};

use super::BookStore;
use crate::models::{AddBookInput, Book, BookId, UpdateBookInput};

#[derive(Debug, Default)]
struct Inner {
    books: BTreeMap<BookId, Book>,
    last_id: BookId,
}

/// Process-local store. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with books built from `inputs`.
    pub fn with_books(inputs: impl IntoIterator<Item = AddBookInput>) -> Result<Self> {
        let store = Self::new();
        for input in inputs {
            store.create(&input)?;
        }
        Ok(store)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))
    }
}

impl BookStore for MemoryStore {
    fn find_all(&self) -> Result<Vec<Book>> {
        Ok(self.lock()?.books.values().cloned().collect())
    }

    fn find_by_id(&self, id: BookId) -> Result<Option<Book>> {
        Ok(self.lock()?.books.get(&id).cloned())
    }

    fn create(&self, input: &AddBookInput) -> Result<Book> {
        let mut inner = self.lock()?;
        inner.last_id += 1;
        let book = Book {
            id: inner.last_id,
            title: input.title.clone(),
            author: input.author.clone(),
            genre: input.genre.clone(),
        };
        inner.books.insert(book.id, book.clone());
        Ok(book)
    }

    fn update_by_id(&self, id: BookId, input: &UpdateBookInput) -> Result<usize> {
        let mut inner = self.lock()?;
        match inner.books.get_mut(&id) {
            Some(book) => {
                input.apply_to(book);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_by_id(&self, id: BookId) -> Result<usize> {
        Ok(self.lock()?.books.remove(&id).map_or(0, |_| 1))
    }
}
