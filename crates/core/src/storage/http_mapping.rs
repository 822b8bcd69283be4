//! HTTP status codes for repository results.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// Only a missing todo is answered as a client error. An unreachable store
/// is 503 so callers may retry; every other variant comes from the storage
/// layer itself (a corrupt record, a failed query, an id collision on a
/// server-generated id) and is 500.
///
/// ```
/// use todoapi_core::storage::{repository_error_to_status_code, RepositoryError};
///
/// let error = RepositoryError::InvalidData("isComplete is not a boolean".into());
/// assert_eq!(repository_error_to_status_code(&error), 500);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::AlreadyExists { .. }
        | RepositoryError::QueryFailed(_)
        | RepositoryError::InvalidData(_) => 500,
    }
}
