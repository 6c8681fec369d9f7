//! DynamoDB item table implementation.
//!
//! Implements `notes_core::storage::ItemTable` on top of a single table keyed
//! by `pk`/`sk`.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use notes_core::storage::{ItemTable, Result, StoredItem};

use super::client::create_client;
use super::conversions::{item_to_stored_item, primary_key, stored_item_to_item};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error,
};
use crate::config::Config;

/// DynamoDB-based item table.
///
/// The client is injected so the application owns its lifecycle; clones share
/// the underlying connection pool.
#[derive(Debug, Clone)]
pub struct DynamoDbTable {
    client: Client,
    table_name: String,
}

impl DynamoDbTable {
    /// Creates a new table handle with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new table handle from configuration, building a fresh client.
    pub async fn from_config(config: &Config) -> Self {
        let client = create_client(config).await;
        Self::new(client, config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Get the underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl ItemTable for DynamoDbTable {
    async fn get_item(&self, partition_key: &str, sort_key: &str) -> Result<Option<StoredItem>> {
        tracing::debug!(table = %self.table_name, partition_key, sort_key, "GetItem");

        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(primary_key(partition_key, sort_key)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_stored_item(&item)?)),
            None => Ok(None),
        }
    }

    async fn query_items(
        &self,
        partition_key: &str,
        sort_key_prefix: &str,
    ) -> Result<Vec<StoredItem>> {
        let mut stored = Vec::new();
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;

        // Follow LastEvaluatedKey until the partition is exhausted.
        loop {
            let result = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("pk = :pk AND begins_with(sk, :prefix)")
                .expression_attribute_values(":pk", AttributeValue::S(partition_key.to_string()))
                .expression_attribute_values(
                    ":prefix",
                    AttributeValue::S(sort_key_prefix.to_string()),
                )
                .set_exclusive_start_key(exclusive_start_key.take())
                .send()
                .await
                .map_err(map_query_error)?;

            for item in result.items.unwrap_or_default() {
                stored.push(item_to_stored_item(&item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(
            table = %self.table_name,
            partition_key,
            sort_key_prefix,
            count = stored.len(),
            "Query"
        );
        Ok(stored)
    }

    async fn put_item(&self, item: &StoredItem) -> Result<()> {
        tracing::debug!(
            table = %self.table_name,
            partition_key = %item.partition_key,
            sort_key = %item.sort_key,
            "PutItem"
        );

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(stored_item_to_item(item)))
            .condition_expression("attribute_not_exists(pk)")
            .send()
            .await
            .map_err(|e| {
                map_put_item_error(e, format!("{}:{}", item.partition_key, item.sort_key))
            })?;

        Ok(())
    }

    async fn delete_item(&self, partition_key: &str, sort_key: &str) -> Result<()> {
        tracing::debug!(table = %self.table_name, partition_key, sort_key, "DeleteItem");

        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(primary_key(partition_key, sort_key)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
