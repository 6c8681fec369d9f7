//! Pure conversions between notes and stored items.

use crate::storage::{RepositoryError, SortKey, StoredItem};

use super::{NewNote, Note, NoteListItem};

/// Convert a Note to its stored item.
pub fn note_to_item(note: &Note) -> StoredItem {
    StoredItem {
        partition_key: note.user_id.clone(),
        sort_key: SortKey::note(note.id.as_str()).encode(),
        slug: note.slug.clone(),
        title: note.title.clone(),
        body: note.body.clone(),
    }
}

/// Build the stored item for a note that has just been assigned `id`.
pub fn new_note_to_item(new_note: &NewNote, id: &str) -> StoredItem {
    StoredItem {
        partition_key: new_note.user_id.clone(),
        sort_key: SortKey::note(id).encode(),
        slug: new_note.slug.clone(),
        title: new_note.title.clone(),
        body: new_note.body.clone(),
    }
}

/// Convert a stored item back to a Note.
pub fn item_to_note(item: StoredItem) -> Result<Note, RepositoryError> {
    let id = note_id(&item.sort_key)?;
    Ok(Note {
        id,
        user_id: item.partition_key,
        slug: item.slug,
        title: item.title,
        body: item.body,
    })
}

/// Project a stored item to the list view, dropping the body.
pub fn item_to_list_item(item: StoredItem) -> Result<NoteListItem, RepositoryError> {
    let id = note_id(&item.sort_key)?;
    Ok(NoteListItem {
        id,
        slug: item.slug,
        title: item.title,
    })
}

fn note_id(sort_key: &str) -> Result<String, RepositoryError> {
    match SortKey::parse(sort_key)? {
        SortKey::Note(id) => Ok(id),
    }
}
