//! Note persistence on top of an [`ItemTable`].

use std::sync::Arc;

use crate::storage::{IdGenerator, ItemTable, Result, SortKey, NOTE_PREFIX};

use super::conversions::{item_to_list_item, item_to_note, new_note_to_item};
use super::{NewNote, Note, NoteListItem};

/// Reads and writes notes in a user-partitioned table.
///
/// Both collaborators are injected; the store itself holds no mutable state
/// and is cheap to clone.
#[derive(Clone)]
pub struct NoteStore {
    table: Arc<dyn ItemTable>,
    ids: Arc<dyn IdGenerator>,
}

impl NoteStore {
    pub fn new(table: Arc<dyn ItemTable>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { table, ids }
    }

    /// Gets a note by id within the owner's partition.
    pub async fn get_note(&self, id: &str, user_id: &str) -> Result<Option<Note>> {
        tracing::debug!(note_id = id, user_id, "Fetching note");

        let sort_key = SortKey::note(id).encode();
        match self.table.get_item(user_id, &sort_key).await? {
            Some(item) => Ok(Some(item_to_note(item)?)),
            None => Ok(None),
        }
    }

    /// Lists every note a user owns, without bodies.
    pub async fn get_note_list_items(&self, user_id: &str) -> Result<Vec<NoteListItem>> {
        let items = self.table.query_items(user_id, NOTE_PREFIX).await?;
        tracing::debug!(user_id, count = items.len(), "Listed notes");

        items.into_iter().map(item_to_list_item).collect()
    }

    /// Creates a note under a freshly generated id.
    pub async fn create_note(&self, new_note: NewNote) -> Result<Note> {
        let id = self.ids.generate();
        let item = new_note_to_item(&new_note, &id);

        self.table.put_item(&item).await?;
        tracing::debug!(note_id = %id, user_id = %new_note.user_id, "Created note");

        Ok(new_note.with_id(id))
    }

    /// Deletes a note. Deleting a note that does not exist succeeds.
    pub async fn delete_note(&self, id: &str, user_id: &str) -> Result<()> {
        let sort_key = SortKey::note(id).encode();
        self.table.delete_item(user_id, &sort_key).await?;
        tracing::debug!(note_id = id, user_id, "Deleted note");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::storage::{RepositoryError, StoredItem};

    /// Table fake that records every call and can be told to fail.
    #[derive(Default)]
    struct RecordingTable {
        items: Mutex<BTreeMap<(String, String), StoredItem>>,
        calls: Mutex<Vec<String>>,
        failure: Mutex<Option<RepositoryError>>,
    }

    impl RecordingTable {
        fn failing(err: RepositoryError) -> Self {
            let table = Self::default();
            *table.failure.lock().unwrap() = Some(err);
            table
        }

        fn record(&self, call: String) -> Result<()> {
            self.calls.lock().unwrap().push(call);
            match self.failure.lock().unwrap().clone() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn insert_raw(&self, item: StoredItem) {
            self.items
                .lock()
                .unwrap()
                .insert((item.partition_key.clone(), item.sort_key.clone()), item);
        }
    }

    #[async_trait]
    impl ItemTable for RecordingTable {
        async fn get_item(&self, pk: &str, sk: &str) -> Result<Option<StoredItem>> {
            self.record(format!("get {pk} {sk}"))?;
            let items = self.items.lock().unwrap();
            Ok(items.get(&(pk.to_string(), sk.to_string())).cloned())
        }

        async fn query_items(&self, pk: &str, prefix: &str) -> Result<Vec<StoredItem>> {
            self.record(format!("query {pk} {prefix}"))?;
            let items = self.items.lock().unwrap();
            Ok(items
                .values()
                .filter(|i| i.partition_key == pk && i.sort_key.starts_with(prefix))
                .cloned()
                .collect())
        }

        async fn put_item(&self, item: &StoredItem) -> Result<()> {
            self.record(format!("put {} {}", item.partition_key, item.sort_key))?;
            self.insert_raw(item.clone());
            Ok(())
        }

        async fn delete_item(&self, pk: &str, sk: &str) -> Result<()> {
            self.record(format!("delete {pk} {sk}"))?;
            self.items
                .lock()
                .unwrap()
                .remove(&(pk.to_string(), sk.to_string()));
            Ok(())
        }
    }

    fn sequential_ids() -> Arc<dyn IdGenerator> {
        let counter = AtomicUsize::new(0);
        Arc::new(move || format!("n{}", counter.fetch_add(1, Ordering::SeqCst) + 1))
    }

    fn store_with(table: Arc<RecordingTable>) -> NoteStore {
        NoteStore::new(table, sequential_ids())
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_note() {
        let table = Arc::new(RecordingTable::default());
        let store = store_with(table.clone());

        let created = store
            .create_note(NewNote::new("u1", "a", "A", "hello"))
            .await
            .unwrap();
        let fetched = store.get_note(&created.id, "u1").await.unwrap();

        assert_eq!(created.id, "n1");
        assert_eq!(fetched, Some(created));
        assert_eq!(table.calls(), vec!["put u1 note#n1", "get u1 note#n1"]);
    }

    #[tokio::test]
    async fn test_get_missing_note_is_none() {
        let store = store_with(Arc::new(RecordingTable::default()));
        assert_eq!(store.get_note("nope", "u1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_is_scoped_to_owner() {
        let store = store_with(Arc::new(RecordingTable::default()));
        let created = store
            .create_note(NewNote::new("u1", "a", "A", "hello"))
            .await
            .unwrap();

        assert_eq!(store.get_note(&created.id, "u2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_queries_note_prefix_and_projects() {
        let table = Arc::new(RecordingTable::default());
        let store = store_with(table.clone());

        store
            .create_note(NewNote::new("u1", "a", "A", "hello"))
            .await
            .unwrap();
        store
            .create_note(NewNote::new("u2", "b", "B", "other"))
            .await
            .unwrap();

        let items = store.get_note_list_items("u1").await.unwrap();

        assert_eq!(
            items,
            vec![NoteListItem {
                id: "n1".to_string(),
                slug: "a".to_string(),
                title: "A".to_string(),
            }]
        );
        assert_eq!(table.calls().last().unwrap(), "query u1 note#");
    }

    #[tokio::test]
    async fn test_duplicate_slugs_are_allowed() {
        let store = store_with(Arc::new(RecordingTable::default()));
        store
            .create_note(NewNote::new("u1", "same", "First", ""))
            .await
            .unwrap();
        store
            .create_note(NewNote::new("u1", "same", "Second", ""))
            .await
            .unwrap();

        let items = store.get_note_list_items("u1").await.unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.slug == "same"));
    }

    #[tokio::test]
    async fn test_delete_removes_note() {
        let store = store_with(Arc::new(RecordingTable::default()));
        let created = store
            .create_note(NewNote::new("u1", "a", "A", "hello"))
            .await
            .unwrap();

        store.delete_note(&created.id, "u1").await.unwrap();

        assert_eq!(store.get_note(&created.id, "u1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_missing_note_succeeds() {
        let table = Arc::new(RecordingTable::default());
        let store = store_with(table.clone());

        store.delete_note("ghost", "u1").await.unwrap();
        assert_eq!(table.calls(), vec!["delete u1 note#ghost"]);
    }

    /// Backend that ignores the requested kind and hands back a profile item.
    struct WrongKindTable;

    fn profile_item(pk: &str) -> StoredItem {
        StoredItem {
            partition_key: pk.to_string(),
            sort_key: "profile#x".to_string(),
            slug: String::new(),
            title: String::new(),
            body: String::new(),
        }
    }

    #[async_trait]
    impl ItemTable for WrongKindTable {
        async fn get_item(&self, pk: &str, _sk: &str) -> Result<Option<StoredItem>> {
            Ok(Some(profile_item(pk)))
        }

        async fn query_items(&self, pk: &str, _prefix: &str) -> Result<Vec<StoredItem>> {
            Ok(vec![profile_item(pk)])
        }

        async fn put_item(&self, _item: &StoredItem) -> Result<()> {
            Ok(())
        }

        async fn delete_item(&self, _pk: &str, _sk: &str) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_get_rejects_item_with_foreign_sort_key() {
        let store = NoteStore::new(Arc::new(WrongKindTable), sequential_ids());
        assert!(matches!(
            store.get_note("x", "u1").await,
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[tokio::test]
    async fn test_list_rejects_item_with_foreign_sort_key() {
        let store = NoteStore::new(Arc::new(WrongKindTable), sequential_ids());
        assert!(matches!(
            store.get_note_list_items("u1").await,
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_id_round_trips() {
        let table = Arc::new(RecordingTable::default());
        table.insert_raw(StoredItem {
            partition_key: "u1".to_string(),
            sort_key: "note#".to_string(),
            slug: "s".to_string(),
            title: "t".to_string(),
            body: "b".to_string(),
        });
        let store = store_with(table);

        let items = store.get_note_list_items("u1").await.unwrap();
        assert_eq!(items[0].id, "");
        assert!(store.get_note("", "u1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_failures_propagate_unchanged() {
        let err = RepositoryError::ConnectionFailed("socket closed".to_string());
        let store = store_with(Arc::new(RecordingTable::failing(err.clone())));

        assert_eq!(store.get_note("n1", "u1").await, Err(err.clone()));
        assert_eq!(store.get_note_list_items("u1").await, Err(err.clone()));
        assert_eq!(
            store
                .create_note(NewNote::new("u1", "a", "A", "hello"))
                .await,
            Err(err.clone())
        );
        assert_eq!(store.delete_note("n1", "u1").await, Err(err));
    }
}
