//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! [`Todo`]. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use todoapi_core::storage::RepositoryError;
use todoapi_core::todo::Todo;

use super::keys::{IS_COMPLETE_ATTR, NAME_ATTR, PARTITION_KEY};

/// Convert a Todo to a DynamoDB item.
///
/// A missing name is left out of the item rather than stored as NULL.
pub fn todo_to_item(todo: &Todo) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        PARTITION_KEY.to_string(),
        AttributeValue::S(todo.id.clone()),
    );
    if let Some(name) = &todo.name {
        item.insert(NAME_ATTR.to_string(), AttributeValue::S(name.clone()));
    }
    item.insert(
        IS_COMPLETE_ATTR.to_string(),
        AttributeValue::Bool(todo.is_complete),
    );

    item
}

/// Convert a DynamoDB item to a Todo.
pub fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Result<Todo, RepositoryError> {
    Ok(Todo {
        id: get_string(item, PARTITION_KEY)?,
        name: get_optional_string(item, NAME_ATTR),
        is_complete: get_bool(item, IS_COMPLETE_ATTR)?,
    })
}

// ============================================================================
// Attribute helpers
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a boolean attribute. A missing attribute reads as `false`.
fn get_bool(item: &HashMap<String, AttributeValue>, key: &str) -> Result<bool, RepositoryError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(false),
        Some(value) => value
            .as_bool()
            .copied()
            .map_err(|_| RepositoryError::InvalidData(format!("Invalid boolean field: {}", key))),
    }
}
