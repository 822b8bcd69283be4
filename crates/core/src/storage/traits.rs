use async_trait::async_trait;

use crate::todo::Todo;

use super::Result;

/// Raw persistence operations for todo records.
///
/// Implementations carry no business rules. They must report a missing
/// record as `Ok(None)` / `Ok(false)` rather than as an error, so callers
/// can tell absence apart from a storage fault.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Short name of the backend, used in logs and health output.
    fn backend_name(&self) -> &'static str;

    /// Gets every stored todo, in no particular order.
    async fn get_all(&self) -> Result<Vec<Todo>>;

    /// Gets the todos whose `is_complete` flag is set.
    async fn get_complete(&self) -> Result<Vec<Todo>>;

    /// Gets a todo by its ID.
    async fn get_by_id(&self, id: &str) -> Result<Option<Todo>>;

    /// Inserts a new todo and returns the stored record.
    ///
    /// Fails with `AlreadyExists` if the id is taken.
    async fn insert(&self, todo: &Todo) -> Result<Todo>;

    /// Overwrites the todo stored under `todo.id`.
    ///
    /// Returns `None` if no such record exists.
    async fn replace(&self, todo: &Todo) -> Result<Option<Todo>>;

    /// Removes a todo by its ID. Returns `false` if it did not exist.
    async fn remove_by_id(&self, id: &str) -> Result<bool>;
}
