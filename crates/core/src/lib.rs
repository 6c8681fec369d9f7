//! notes_core - domain types, key mapping and the note store.
//!
//! Everything in this crate is storage-agnostic: the physical table is an
//! [`storage::ItemTable`] collaborator supplied by the caller.

pub mod note;
pub mod storage;
