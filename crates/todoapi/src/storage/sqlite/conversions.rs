//! SQLite row conversion functions.

use rusqlite::Row;
use todoapi_core::todo::Todo;

/// Convert a SQLite row to a Todo.
///
/// Expected columns: id, name, is_complete
pub fn row_to_todo(row: &Row) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        name: row.get(1)?,
        is_complete: row.get(2)?,
    })
}
