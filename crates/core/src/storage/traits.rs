use async_trait::async_trait;

use super::{Result, StoredItem};

/// Key-value table holding every item of the single-table layout.
///
/// Implementations own the physical storage; callers address items by
/// partition key and encoded sort key.
#[async_trait]
pub trait ItemTable: Send + Sync {
    /// Gets the item stored under the given key pair.
    async fn get_item(&self, partition_key: &str, sort_key: &str) -> Result<Option<StoredItem>>;

    /// Gets every item in a partition whose sort key starts with `sort_key_prefix`.
    async fn query_items(
        &self,
        partition_key: &str,
        sort_key_prefix: &str,
    ) -> Result<Vec<StoredItem>>;

    /// Writes a new item.
    async fn put_item(&self, item: &StoredItem) -> Result<()>;

    /// Deletes the item under the given key pair. Missing items are not an error.
    async fn delete_item(&self, partition_key: &str, sort_key: &str) -> Result<()>;
}

/// Source of globally unique, opaque item ids.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate(&self) -> String {
        self()
    }
}
