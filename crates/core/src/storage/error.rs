use thiserror::Error;

/// Failures reported by a [`TodoStore`](super::TodoStore) or the repository.
///
/// A missing record is normally `Ok(None)` / `Ok(false)` at the store
/// boundary. `NotFound` exists so the HTTP layer can turn that absence into a
/// response. Every other variant is a storage fault that the client did not
/// cause.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Todo not found: {id}")]
    NotFound { id: String },

    /// A server-generated id collided with a stored record.
    #[error("Todo id already taken: {id}")]
    AlreadyExists { id: String },

    #[error("Storage unavailable: {0}")]
    ConnectionFailed(String),

    #[error("Storage query failed: {0}")]
    QueryFailed(String),

    /// A stored record could not be decoded into a `Todo`.
    #[error("Stored todo is malformed: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Builds a `NotFound` error for a todo id.
    pub fn todo_not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Builds an `AlreadyExists` error for a todo id.
    pub fn id_taken(id: impl Into<String>) -> Self {
        Self::AlreadyExists { id: id.into() }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
