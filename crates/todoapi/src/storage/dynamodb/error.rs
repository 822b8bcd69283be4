//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `todoapi_core::storage`.
//! Conditional check failures on replace and delete mean "not found"; the
//! store tests for them with [`put_target_missing`] and
//! [`delete_target_missing`] before falling back to the mappers.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use todoapi_core::storage::RepositoryError;

const TABLE_NOT_FOUND: &str = "Table not found";
const THROUGHPUT_EXCEEDED: &str = "Throughput exceeded, please retry";
const REQUEST_LIMIT_EXCEEDED: &str = "Request limit exceeded, please retry";
const INTERNAL_SERVER_ERROR: &str = "DynamoDB internal server error";

/// True when a conditional PutItem failed because the target item is absent.
///
/// `None` is a transport-level failure and never counts as a missing item.
pub fn put_target_missing(err: Option<&PutItemError>) -> bool {
    err.is_some_and(PutItemError::is_conditional_check_failed_exception)
}

/// True when a conditional DeleteItem failed because the target item is absent.
pub fn delete_target_missing(err: Option<&DeleteItemError>) -> bool {
    err.is_some_and(DeleteItemError::is_conditional_check_failed_exception)
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => map_connection_error(err),
        err => match err.into_service_error() {
            GetItemError::ResourceNotFoundException(_) => query_failed(TABLE_NOT_FOUND),
            GetItemError::ProvisionedThroughputExceededException(_) => {
                query_failed(THROUGHPUT_EXCEEDED)
            }
            GetItemError::RequestLimitExceeded(_) => query_failed(REQUEST_LIMIT_EXCEEDED),
            GetItemError::InternalServerError(_) => query_failed(INTERNAL_SERVER_ERROR),
            err => RepositoryError::QueryFailed(format!("GetItem failed: {:?}", err)),
        },
    }
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => map_connection_error(err),
        err => match err.into_service_error() {
            ScanError::ResourceNotFoundException(_) => query_failed(TABLE_NOT_FOUND),
            ScanError::ProvisionedThroughputExceededException(_) => {
                query_failed(THROUGHPUT_EXCEEDED)
            }
            ScanError::RequestLimitExceeded(_) => query_failed(REQUEST_LIMIT_EXCEEDED),
            ScanError::InternalServerError(_) => query_failed(INTERNAL_SERVER_ERROR),
            err => RepositoryError::QueryFailed(format!("Scan failed: {:?}", err)),
        },
    }
}

/// Map a PutItem SDK error to RepositoryError.
///
/// A failed `attribute_not_exists` condition means the id is taken.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    id: impl Into<String>,
) -> RepositoryError {
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => map_connection_error(err),
        err => match err.into_service_error() {
            PutItemError::ConditionalCheckFailedException(_) => RepositoryError::id_taken(id),
            PutItemError::ResourceNotFoundException(_) => query_failed(TABLE_NOT_FOUND),
            PutItemError::ProvisionedThroughputExceededException(_) => {
                query_failed(THROUGHPUT_EXCEEDED)
            }
            PutItemError::RequestLimitExceeded(_) => query_failed(REQUEST_LIMIT_EXCEEDED),
            PutItemError::TransactionConflictException(_) => {
                query_failed("Transaction conflict, please retry")
            }
            PutItemError::InternalServerError(_) => query_failed(INTERNAL_SERVER_ERROR),
            err => RepositoryError::QueryFailed(format!("PutItem failed: {:?}", err)),
        },
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> RepositoryError {
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => map_connection_error(err),
        err => match err.into_service_error() {
            DeleteItemError::ResourceNotFoundException(_) => query_failed(TABLE_NOT_FOUND),
            DeleteItemError::ProvisionedThroughputExceededException(_) => {
                query_failed(THROUGHPUT_EXCEEDED)
            }
            DeleteItemError::RequestLimitExceeded(_) => query_failed(REQUEST_LIMIT_EXCEEDED),
            DeleteItemError::TransactionConflictException(_) => {
                query_failed("Transaction conflict, please retry")
            }
            DeleteItemError::InternalServerError(_) => query_failed(INTERNAL_SERVER_ERROR),
            err => RepositoryError::QueryFailed(format!("DeleteItem failed: {:?}", err)),
        },
    }
}

/// Map a generic connection/config error to RepositoryError.
pub fn map_connection_error(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::ConnectionFailed(err.to_string())
}

fn query_failed(message: &str) -> RepositoryError {
    RepositoryError::QueryFailed(message.to_string())
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::types::error::{
        ConditionalCheckFailedException, ResourceNotFoundException,
    };

    use super::*;

    #[test]
    fn test_failed_condition_on_put_means_missing() {
        let err = PutItemError::ConditionalCheckFailedException(
            ConditionalCheckFailedException::builder().build(),
        );
        assert!(put_target_missing(Some(&err)));
    }

    #[test]
    fn test_other_put_failures_are_not_missing() {
        let err =
            PutItemError::ResourceNotFoundException(ResourceNotFoundException::builder().build());
        assert!(!put_target_missing(Some(&err)));
        assert!(!put_target_missing(None));
    }

    #[test]
    fn test_failed_condition_on_delete_means_missing() {
        let err = DeleteItemError::ConditionalCheckFailedException(
            ConditionalCheckFailedException::builder().build(),
        );
        assert!(delete_target_missing(Some(&err)));
    }

    #[test]
    fn test_other_delete_failures_are_not_missing() {
        let err = DeleteItemError::ResourceNotFoundException(
            ResourceNotFoundException::builder().build(),
        );
        assert!(!delete_target_missing(Some(&err)));
        assert!(!delete_target_missing(None));
    }

    #[test]
    fn test_connection_error() {
        let err = map_connection_error("connection refused");
        assert_eq!(
            err,
            RepositoryError::ConnectionFailed("connection refused".to_string())
        );
    }

    #[test]
    fn test_query_failed_message() {
        assert_eq!(
            query_failed(TABLE_NOT_FOUND),
            RepositoryError::QueryFailed("Table not found".to_string())
        );
    }
}
