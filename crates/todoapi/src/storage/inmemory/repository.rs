//! In-memory store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todoapi_core::storage::{RepositoryError, Result, TodoStore};
use todoapi_core::todo::{filter_complete, Todo};

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    todos: Arc<RwLock<HashMap<String, Todo>>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for InMemoryStore {
    fn backend_name(&self) -> &'static str {
        "inmemory"
    }

    async fn get_all(&self) -> Result<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.values().cloned().collect())
    }

    async fn get_complete(&self) -> Result<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(filter_complete(todos.values()).cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.get(id).cloned())
    }

    async fn insert(&self, todo: &Todo) -> Result<Todo> {
        let mut todos = self.todos.write().await;
        if todos.contains_key(&todo.id) {
            return Err(RepositoryError::id_taken(&todo.id));
        }
        todos.insert(todo.id.clone(), todo.clone());
        Ok(todo.clone())
    }

    async fn replace(&self, todo: &Todo) -> Result<Option<Todo>> {
        let mut todos = self.todos.write().await;
        match todos.get_mut(&todo.id) {
            Some(stored) => {
                *stored = todo.clone();
                Ok(Some(todo.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove_by_id(&self, id: &str) -> Result<bool> {
        let mut todos = self.todos.write().await;
        Ok(todos.remove(id).is_some())
    }
}
