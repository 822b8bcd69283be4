mod operations;
mod types;

pub use operations::{filter_complete, new_todo_id};
pub use types::{Todo, TodoInput};
