//! Storage backend implementations.
//!
//! This module provides concrete implementations of the [`TodoStore`] trait
//! defined in `todoapi_core::storage`. Several backends can be compiled in at
//! once; the active one is chosen at startup from `DATABASE_PROVIDER`.
//!
//! # Feature Flags
//!
//! - always available: in-memory backend
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `dynamodb`: AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p todoapi
//! ```
//!
//! Build with every backend:
//! ```bash
//! cargo build -p todoapi --features dynamodb
//! ```
//!
//! [`TodoStore`]: todoapi_core::storage::TodoStore

pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub use inmemory::InMemoryStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbStore;
