//! Application state.
//!
//! Holds the [`TodoRepository`] shared by all request handlers, built over
//! whichever storage backend the configuration selects.

use std::sync::Arc;

use todoapi_core::storage::{TodoRepository, TodoStore};

use crate::config::{Config, ConfigError, StorageProvider};
use crate::storage::InMemoryStore;

/// Shared application state.
///
/// Cloned for each request handler. The repository holds its backend behind
/// an `Arc`, so clones share the same store.
#[derive(Clone)]
pub struct AppState {
    pub todos: TodoRepository,
}

impl AppState {
    /// Creates state around an existing store.
    pub fn with_store(store: Arc<dyn TodoStore>) -> Self {
        Self {
            todos: TodoRepository::new(store),
        }
    }

    /// Creates state backed by an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()))
    }

    /// Creates state with the backend selected by `config`.
    ///
    /// Fails if the backend cannot be opened; the server does not fall back to
    /// another backend.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        config.validate()?;
        let store = build_store(config).await?;
        Ok(Self::with_store(store))
    }

    /// Name of the active storage backend.
    pub fn backend_name(&self) -> &'static str {
        self.todos.backend_name()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}

async fn build_store(config: &Config) -> Result<Arc<dyn TodoStore>, anyhow::Error> {
    match config.provider {
        StorageProvider::InMemory => Ok(Arc::new(InMemoryStore::new())),

        #[cfg(feature = "sqlite")]
        StorageProvider::Sqlite => {
            let store = crate::storage::SqliteStore::new(&config.sqlite_path).await?;
            Ok(Arc::new(store))
        }

        #[cfg(feature = "dynamodb")]
        StorageProvider::DynamoDb => {
            let store = crate::storage::DynamoDbStore::from_settings(&config.dynamodb).await?;
            tracing::info!(table = %store.table_name(), "Using DynamoDB table");
            Ok(Arc::new(store))
        }

        #[allow(unreachable_patterns)]
        provider => Err(ConfigError::BackendNotCompiled {
            provider,
            feature: provider.as_str(),
        }
        .into()),
    }
}
