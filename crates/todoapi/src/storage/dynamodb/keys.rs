//! DynamoDB key generation.
//!
//! Each todo is one item keyed by its id, so the table needs only a partition
//! key and no sort key.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

/// Name of the partition key attribute.
pub const PARTITION_KEY: &str = "id";

/// Attribute holding the completion flag.
pub const IS_COMPLETE_ATTR: &str = "isComplete";

/// Attribute holding the optional display name.
pub const NAME_ATTR: &str = "name";

/// Condition that only matches when no item with the key exists yet.
pub const NOT_EXISTS_CONDITION: &str = "attribute_not_exists(id)";

/// Condition that only matches when the item with the key already exists.
pub const EXISTS_CONDITION: &str = "attribute_exists(id)";

/// Scan filter selecting completed todos.
pub const COMPLETE_FILTER: &str = "isComplete = :complete";

/// Primary key for the todo with the given id.
pub fn todo_key(id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(PARTITION_KEY.to_string(), AttributeValue::S(id.to_string()))])
}
