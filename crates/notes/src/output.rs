//! Output formatting functions.

use clap::ValueEnum;
use notes_core::note::{Note, NoteListItem};
use serde::Serialize;

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Format a value as JSON.
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Format a single note.
pub fn format_note(note: &Note) -> String {
    format!(
        "{} ({})\n  id:   {}\n  user: {}\n\n{}",
        note.title, note.slug, note.id, note.user_id, note.body
    )
}

/// Format a list of notes, one per line.
pub fn format_list_items(items: &[NoteListItem]) -> String {
    if items.is_empty() {
        return "No notes".to_string();
    }

    items
        .iter()
        .map(|item| format!("{}  {}  {}", item.id, item.slug, item.title))
        .collect::<Vec<_>>()
        .join("\n")
}
