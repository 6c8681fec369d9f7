//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! stored items. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use notes_core::storage::{RepositoryError, StoredItem};

// ============================================================================
// Attribute names
// ============================================================================

pub const PK_ATTR: &str = "pk";
pub const SK_ATTR: &str = "sk";
pub const SLUG_ATTR: &str = "slug";
pub const TITLE_ATTR: &str = "title";
pub const BODY_ATTR: &str = "body";

/// Convert a StoredItem to a DynamoDB item.
pub fn stored_item_to_item(stored: &StoredItem) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        PK_ATTR.to_string(),
        AttributeValue::S(stored.partition_key.clone()),
    );
    item.insert(
        SK_ATTR.to_string(),
        AttributeValue::S(stored.sort_key.clone()),
    );

    // Data
    item.insert(SLUG_ATTR.to_string(), AttributeValue::S(stored.slug.clone()));
    item.insert(
        TITLE_ATTR.to_string(),
        AttributeValue::S(stored.title.clone()),
    );
    item.insert(BODY_ATTR.to_string(), AttributeValue::S(stored.body.clone()));

    item
}

/// Convert a DynamoDB item to a StoredItem.
pub fn item_to_stored_item(
    item: &HashMap<String, AttributeValue>,
) -> Result<StoredItem, RepositoryError> {
    Ok(StoredItem {
        partition_key: get_string(item, PK_ATTR)?,
        sort_key: get_string(item, SK_ATTR)?,
        slug: get_string(item, SLUG_ATTR)?,
        title: get_string(item, TITLE_ATTR)?,
        body: get_string(item, BODY_ATTR)?,
    })
}

/// Build the primary key map for GetItem/DeleteItem.
pub fn primary_key(partition_key: &str, sort_key: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            PK_ATTR.to_string(),
            AttributeValue::S(partition_key.to_string()),
        ),
        (SK_ATTR.to_string(), AttributeValue::S(sort_key.to_string())),
    ])
}

// ============================================================================
// Helper functions
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
