//! Bookshelf: a small CRUD HTTP API for a collection of books.
//!
//! Requests flow through three layers: the axum handlers in [`api`], the
//! [`service::BookService`] and a [`store::BookStore`] implementation.

pub mod api;
pub mod config;
pub mod service;

pub use bookshelf_core::{db, models, store};
