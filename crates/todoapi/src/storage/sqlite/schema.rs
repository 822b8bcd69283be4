//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id TEXT PRIMARY KEY,
    name TEXT,
    is_complete INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_todos_is_complete ON todos(is_complete);
"#;

pub const INSERT_TODO: &str = r#"
INSERT INTO todos (id, name, is_complete)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_ALL_TODOS: &str = r#"
SELECT id, name, is_complete
FROM todos
"#;

pub const SELECT_COMPLETE_TODOS: &str = r#"
SELECT id, name, is_complete
FROM todos
WHERE is_complete = 1
"#;

pub const SELECT_TODO_BY_ID: &str = r#"
SELECT id, name, is_complete
FROM todos
WHERE id = ?1
"#;

pub const UPDATE_TODO: &str = r#"
UPDATE todos
SET name = ?2, is_complete = ?3
WHERE id = ?1
"#;

pub const DELETE_TODO: &str = r#"
DELETE FROM todos
WHERE id = ?1
"#;
