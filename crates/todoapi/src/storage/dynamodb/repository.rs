//! DynamoDB store implementation.
//!
//! Implements [`TodoStore`] from `todoapi_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use todoapi_core::storage::{Result, TodoStore};
use todoapi_core::todo::Todo;

use super::conversions::{item_to_todo, todo_to_item};
use super::error::{
    delete_target_missing, map_delete_item_error, map_get_item_error, map_put_item_error,
    map_scan_error, put_target_missing,
};
use super::keys;
use crate::config::DynamoDbSettings;

/// Items requested per Scan page.
const SCAN_PAGE_SIZE: i32 = 100;

/// DynamoDB-based storage backend.
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new store from application settings.
    ///
    /// Uses the AWS SDK default credential chain against the configured
    /// endpoint. The table is expected to exist with `id` as its partition key.
    pub async fn from_settings(settings: &DynamoDbSettings) -> Result<Self> {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint) = &settings.connection_string {
            loader = loader.endpoint_url(endpoint);
        }
        let config = loader.load().await;

        Ok(Self::new(Client::new(&config), settings.table_name()))
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Scans the whole table, following `LastEvaluatedKey` until exhausted.
    async fn scan(&self, complete_only: bool) -> Result<Vec<Todo>> {
        let mut todos = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let mut request = self
                .client
                .scan()
                .table_name(&self.table_name)
                .limit(SCAN_PAGE_SIZE)
                .set_exclusive_start_key(start_key.take());

            if complete_only {
                request = request
                    .filter_expression(keys::COMPLETE_FILTER)
                    .expression_attribute_values(":complete", AttributeValue::Bool(true));
            }

            let page = request.send().await.map_err(map_scan_error)?;

            for item in page.items() {
                todos.push(item_to_todo(item)?);
            }

            match page.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(todos)
    }
}

#[async_trait]
impl TodoStore for DynamoDbStore {
    fn backend_name(&self) -> &'static str {
        "dynamodb"
    }

    async fn get_all(&self) -> Result<Vec<Todo>> {
        self.scan(false).await
    }

    async fn get_complete(&self) -> Result<Vec<Todo>> {
        self.scan(true).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Todo>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::todo_key(id)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_todo(&item)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, todo: &Todo) -> Result<Todo> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(todo_to_item(todo)))
            .condition_expression(keys::NOT_EXISTS_CONDITION)
            .send()
            .await
            .map_err(|e| map_put_item_error(e, &todo.id))?;

        Ok(todo.clone())
    }

    async fn replace(&self, todo: &Todo) -> Result<Option<Todo>> {
        let result = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(todo_to_item(todo)))
            .condition_expression(keys::EXISTS_CONDITION)
            .send()
            .await;

        match result {
            Ok(_) => Ok(Some(todo.clone())),
            Err(err) if put_target_missing(err.as_service_error()) => Ok(None),
            Err(err) => Err(map_put_item_error(err, &todo.id)),
        }
    }

    async fn remove_by_id(&self, id: &str) -> Result<bool> {
        let result = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::todo_key(id)))
            .condition_expression(keys::EXISTS_CONDITION)
            .send()
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(err) if delete_target_missing(err.as_service_error()) => Ok(false),
            Err(err) => Err(map_delete_item_error(err)),
        }
    }
}
