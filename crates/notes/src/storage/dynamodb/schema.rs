//! Table provisioning.
//!
//! `notes_table_config` is pure data; `ensure_table` talks to DynamoDB.

use std::time::Duration;

use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType, TableStatus,
};
use aws_sdk_dynamodb::Client;

use super::conversions::{PK_ATTR, SK_ATTR};
use super::error::SchemaError;

const ACTIVATION_POLL_INTERVAL: Duration = Duration::from_secs(1);
const ACTIVATION_MAX_ATTEMPTS: u32 = 60;

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: String,
    pub sort_key: String,
}

/// Returns the table configuration for notes.
pub fn notes_table_config(table_name: &str) -> TableConfig {
    TableConfig {
        table_name: table_name.to_string(),
        partition_key: PK_ATTR.to_string(),
        sort_key: SK_ATTR.to_string(),
    }
}

/// What `ensure_table` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    Created,
    AlreadyExists,
}

/// Creates the table unless it already exists, then waits for it to be active.
pub async fn ensure_table(
    client: &Client,
    config: &TableConfig,
) -> Result<Provisioned, SchemaError> {
    if table_status(client, &config.table_name).await?.is_some() {
        tracing::info!(table = %config.table_name, "Table already exists");
        wait_for_table_active(client, &config.table_name).await?;
        return Ok(Provisioned::AlreadyExists);
    }

    tracing::info!(table = %config.table_name, "Creating table");
    create_table(client, config).await?;
    wait_for_table_active(client, &config.table_name).await?;

    Ok(Provisioned::Created)
}

async fn create_table(client: &Client, config: &TableConfig) -> Result<(), SchemaError> {
    let key_schema = vec![
        KeySchemaElement::builder()
            .attribute_name(&config.partition_key)
            .key_type(KeyType::Hash)
            .build()
            .map_err(|e| SchemaError::AwsSdk(e.to_string()))?,
        KeySchemaElement::builder()
            .attribute_name(&config.sort_key)
            .key_type(KeyType::Range)
            .build()
            .map_err(|e| SchemaError::AwsSdk(e.to_string()))?,
    ];

    let attribute_definitions = vec![
        AttributeDefinition::builder()
            .attribute_name(&config.partition_key)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(|e| SchemaError::AwsSdk(e.to_string()))?,
        AttributeDefinition::builder()
            .attribute_name(&config.sort_key)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(|e| SchemaError::AwsSdk(e.to_string()))?,
    ];

    client
        .create_table()
        .table_name(&config.table_name)
        .set_key_schema(Some(key_schema))
        .set_attribute_definitions(Some(attribute_definitions))
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await
        .map_err(|e| SchemaError::AwsSdk(DisplayErrorContext(e).to_string()))?;

    Ok(())
}

/// Fetches the table status, returns None if the table doesn't exist.
async fn table_status(
    client: &Client,
    table_name: &str,
) -> Result<Option<TableStatus>, SchemaError> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(response) => Ok(Some(
            response
                .table()
                .and_then(|table| table.table_status())
                .cloned()
                .unwrap_or(TableStatus::Creating),
        )),
        Err(err) => match err.into_service_error() {
            DescribeTableError::ResourceNotFoundException(_) => Ok(None),
            err => Err(SchemaError::AwsSdk(DisplayErrorContext(err).to_string())),
        },
    }
}

async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<(), SchemaError> {
    for attempt in 1..=ACTIVATION_MAX_ATTEMPTS {
        if table_status(client, table_name).await? == Some(TableStatus::Active) {
            return Ok(());
        }
        tracing::debug!(table = table_name, attempt, "Waiting for table to become active");
        tokio::time::sleep(ACTIVATION_POLL_INTERVAL).await;
    }

    Err(SchemaError::TableActivationTimeout {
        table_name: table_name.to_string(),
    })
}
