//! SQLite storage backend implementation.
//!
//! Relational backend built on `rusqlite` for synchronous operations and
//! `tokio-rusqlite` for async wrapping. Pass `:memory:` as the path for a
//! database that lives only as long as the process.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteStore;
