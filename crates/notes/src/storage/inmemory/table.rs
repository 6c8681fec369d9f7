//! In-memory item table implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use notes_core::storage::{ItemTable, RepositoryError, Result, StoredItem};

type ItemKey = (String, String);

/// In-memory item table for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTable {
    items: Arc<RwLock<BTreeMap<ItemKey, StoredItem>>>,
}

impl InMemoryTable {
    /// Creates a new empty in-memory table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items currently stored, across all partitions.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

fn key(partition_key: &str, sort_key: &str) -> ItemKey {
    (partition_key.to_string(), sort_key.to_string())
}

#[async_trait]
impl ItemTable for InMemoryTable {
    async fn get_item(&self, partition_key: &str, sort_key: &str) -> Result<Option<StoredItem>> {
        let items = self.items.read().await;
        Ok(items.get(&key(partition_key, sort_key)).cloned())
    }

    async fn query_items(
        &self,
        partition_key: &str,
        sort_key_prefix: &str,
    ) -> Result<Vec<StoredItem>> {
        let items = self.items.read().await;
        Ok(items
            .range(key(partition_key, sort_key_prefix)..)
            .take_while(|((pk, sk), _)| pk == partition_key && sk.starts_with(sort_key_prefix))
            .map(|(_, item)| item.clone())
            .collect())
    }

    async fn put_item(&self, item: &StoredItem) -> Result<()> {
        let mut items = self.items.write().await;
        let item_key = key(&item.partition_key, &item.sort_key);
        if items.contains_key(&item_key) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Item",
                id: format!("{}:{}", item.partition_key, item.sort_key),
            });
        }
        items.insert(item_key, item.clone());
        Ok(())
    }

    async fn delete_item(&self, partition_key: &str, sort_key: &str) -> Result<()> {
        let mut items = self.items.write().await;
        items.remove(&key(partition_key, sort_key));
        Ok(())
    }
}
