use serde::{Deserialize, Serialize};

/// A persisted todo item.
///
/// `id` is assigned by the server when the todo is created and never changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub name: Option<String>,
    pub is_complete: bool,
}

impl Todo {
    /// Creates an incomplete todo with the given id and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            is_complete: false,
        }
    }

    /// Sets the completion flag.
    pub fn with_complete(mut self, is_complete: bool) -> Self {
        self.is_complete = is_complete;
        self
    }
}

/// Request body for creating or updating a todo.
///
/// Clients may send a full [`Todo`] back. There is no `id` field, so any
/// `id` in the body, whatever its JSON type, is skipped as an unknown key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
}

impl TodoInput {
    /// Builds a new record under a server-assigned id, discarding any
    /// client-supplied one.
    pub fn into_todo(self, id: String) -> Todo {
        Todo {
            id,
            name: self.name,
            is_complete: self.is_complete,
        }
    }

    /// Copies the mutable fields onto an existing record.
    ///
    /// Only `name` and `is_complete` are written; the record keeps its id.
    pub fn apply_to(self, todo: &mut Todo) {
        todo.name = self.name;
        todo.is_complete = self.is_complete;
    }
}
