mod conversions;
mod store;
mod types;

pub use conversions::{item_to_list_item, item_to_note, new_note_to_item, note_to_item};
pub use store::NoteStore;
pub use types::{NewNote, Note, NoteListItem};
