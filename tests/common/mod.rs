//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use anyhow::anyhow;
use axum_test::TestServer;

use bookshelf::api;
use bookshelf::models::{AddBookInput, Book, BookId, UpdateBookInput};
use bookshelf::service::BookService;
use bookshelf::store::{BookStore, MemoryStore};

pub fn book_input(title: &str, author: &str, genre: &[&str]) -> AddBookInput {
    AddBookInput {
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.iter().map(|g| g.to_string()).collect(),
    }
}

/// Two books by the same author, ids 1 and 2.
pub fn sample_books() -> Vec<AddBookInput> {
    vec![
        book_input("Book 1", "Orero Ozore", &["war", "love"]),
        book_input("Book 2", "Orero Ozore", &["war", "love"]),
    ]
}

pub fn memory_service(books: Vec<AddBookInput>) -> BookService<MemoryStore> {
    BookService::new(MemoryStore::with_books(books).expect("Failed to seed store"))
}

pub fn test_server(books: Vec<AddBookInput>) -> TestServer {
    let app = api::router(memory_service(books), &[]);
    TestServer::new(app).expect("Failed to start test server")
}

/// Store whose every call fails, for exercising 500 responses.
pub struct OfflineStore;

impl BookStore for OfflineStore {
    fn find_all(&self) -> anyhow::Result<Vec<Book>> {
        Err(anyhow!("connection refused"))
    }

    fn find_by_id(&self, _id: BookId) -> anyhow::Result<Option<Book>> {
        Err(anyhow!("connection refused"))
    }

    fn create(&self, _input: &AddBookInput) -> anyhow::Result<Book> {
        Err(anyhow!("connection refused"))
    }

    fn update_by_id(&self, _id: BookId, _input: &UpdateBookInput) -> anyhow::Result<usize> {
        Err(anyhow!("connection refused"))
    }

    fn delete_by_id(&self, _id: BookId) -> anyhow::Result<usize> {
        Err(anyhow!("connection refused"))
    }
}
