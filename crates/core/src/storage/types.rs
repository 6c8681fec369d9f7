use serde::{Deserialize, Serialize};

/// A note as it is laid out in the table.
///
/// `sort_key` is kept in its encoded form; use [`super::SortKey::parse`] to
/// recover the typed key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredItem {
    pub partition_key: String,
    pub sort_key: String,
    pub slug: String,
    pub title: String,
    pub body: String,
}
