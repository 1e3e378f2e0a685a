//! Core library for Bookshelf.
//!
//! This crate provides the book model, its input validation schema and the
//! storage layer, independent of any transport layer.
//!
//! # Usage
//!
//! ```no_run
//! use bookshelf_core::db::Database;
//! use bookshelf_core::store::BookStore;
//!
//! let db = Database::open_default()?;
//! db.migrate()?;
//!
//! let books = db.find_all()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod db;
pub mod models;
pub mod store;

// Re-export commonly used types at crate root
pub use db::Database;
pub use store::{BookStore, MemoryStore};
