use uuid::Uuid;

use super::types::Todo;

/// Generates a fresh server-side todo identifier.
pub fn new_todo_id() -> String {
    Uuid::new_v4().to_string()
}

/// Returns the todos marked as complete.
pub fn filter_complete<'a>(
    todos: impl IntoIterator<Item = &'a Todo>,
) -> impl Iterator<Item = &'a Todo> {
    todos.into_iter().filter(|todo| todo.is_complete)
}
