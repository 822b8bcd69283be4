//! In-memory storage backend.
//!
//! Stores todos in a `HashMap` wrapped in `Arc<RwLock<_>>`. Stands in for the
//! relational store when no persistence is required, and backs the router
//! tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! let repo = TodoRepository::new(Arc::new(store));
//! ```

mod repository;

pub use repository::InMemoryStore;
