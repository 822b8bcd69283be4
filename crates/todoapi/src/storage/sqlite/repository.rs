//! SQLite store implementation.
//!
//! Implements [`TodoStore`] from `todoapi_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use todoapi_core::storage::{RepositoryError, Result, TodoStore};
use todoapi_core::todo::Todo;

use super::conversions::row_to_todo;
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Path that opens a private in-memory database instead of a file.
const IN_MEMORY_PATH: &str = ":memory:";

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based storage backend.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Creates a store backed by the database file at `path`.
    ///
    /// The file is created if it doesn't exist and the schema is applied on
    /// every start. `":memory:"` opens an in-memory database.
    pub async fn new(path: &str) -> Result<Self> {
        if path == IN_MEMORY_PATH {
            return Self::new_in_memory().await;
        }

        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a store with an in-memory database.
    ///
    /// Data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn query_all(&self, sql: &'static str) -> Result<Vec<Todo>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_todo).map_err(wrap_err)?;

                let mut todos = Vec::new();
                for row_result in rows {
                    todos.push(row_result.map_err(wrap_err)?);
                }
                Ok(todos)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    /// Runs raw SQL against the underlying connection, bypassing the schema
    /// types. Lets tests plant rows the store itself would never write.
    #[cfg(test)]
    pub(crate) async fn execute_raw(&self, sql: &'static str) -> Result<usize> {
        self.conn
            .call(move |conn| conn.execute(sql, []).map_err(wrap_err))
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl TodoStore for SqliteStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn get_all(&self) -> Result<Vec<Todo>> {
        self.query_all(schema::SELECT_ALL_TODOS).await
    }

    async fn get_complete(&self) -> Result<Vec<Todo>> {
        self.query_all(schema::SELECT_COMPLETE_TODOS).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Todo>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_TODO_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_todo) {
                    Ok(todo) => Ok(Some(todo)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn insert(&self, todo: &Todo) -> Result<Todo> {
        let row = todo.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_TODO,
                    rusqlite::params![row.id, row.name, row.is_complete],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, &todo.id))?;

        Ok(todo.clone())
    }

    async fn replace(&self, todo: &Todo) -> Result<Option<Todo>> {
        let row = todo.clone();

        let affected = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::UPDATE_TODO,
                    rusqlite::params![row.id, row.name, row.is_complete],
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, &todo.id))?;

        Ok((affected > 0).then(|| todo.clone()))
    }

    async fn remove_by_id(&self, id: &str) -> Result<bool> {
        let id_str = id.to_string();

        let affected = self
            .conn
            .call(move |conn| conn.execute(schema::DELETE_TODO, [&id_str]).map_err(wrap_err))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))?;

        Ok(affected > 0)
    }
}
