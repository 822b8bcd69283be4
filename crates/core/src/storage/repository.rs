//! Identity and update policy on top of a [`TodoStore`].

use std::sync::Arc;

use crate::todo::{new_todo_id, Todo, TodoInput};

use super::{Result, TodoStore};

/// Mediates between request handlers and the active storage backend.
///
/// Ids are always assigned here, never taken from the caller, and updates are
/// a read-modify-write against the stored record so only `name` and
/// `is_complete` can change.
#[derive(Clone)]
pub struct TodoRepository {
    store: Arc<dyn TodoStore>,
}

impl TodoRepository {
    /// Creates a repository over the given storage backend.
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// Name of the backend this repository writes to.
    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Gets every todo.
    pub async fn get_all(&self) -> Result<Vec<Todo>> {
        self.store.get_all().await
    }

    /// Gets the completed todos.
    pub async fn get_complete(&self) -> Result<Vec<Todo>> {
        self.store.get_complete().await
    }

    /// Gets a todo by id. `Ok(None)` means it does not exist.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Todo>> {
        self.store.get_by_id(id).await
    }

    /// Creates a todo under a freshly generated id.
    pub async fn create(&self, input: TodoInput) -> Result<Todo> {
        let todo = input.into_todo(new_todo_id());
        self.store.insert(&todo).await
    }

    /// Applies `name` and `is_complete` from `input` to the todo stored under
    /// `id`. Returns `Ok(None)` if there is no such todo.
    pub async fn update(&self, id: &str, input: TodoInput) -> Result<Option<Todo>> {
        let Some(mut existing) = self.store.get_by_id(id).await? else {
            return Ok(None);
        };

        input.apply_to(&mut existing);

        self.store.replace(&existing).await
    }

    /// Deletes a todo. Returns `false` if it did not exist.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        self.store.remove_by_id(id).await
    }
}
