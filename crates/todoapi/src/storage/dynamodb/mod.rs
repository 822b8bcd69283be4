//! DynamoDB storage backend implementation.
//!
//! Stores each todo as one item in a single table keyed by `id`, using
//! `aws-sdk-dynamodb`.

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoDbStore;
