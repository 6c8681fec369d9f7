//! Sort key encoding for the single-table layout.
//!
//! All items for one user share a partition keyed by the user id. Inside that
//! partition the sort key carries a kind prefix followed by the item id, so
//! `note#<id>` identifies a note. Parsing strips exactly one prefix, which
//! keeps `parse(encode(k)) == k` for every id, including ids that themselves
//! contain the prefix text.

use std::fmt;
use std::str::FromStr;

use super::KeyError;

// ============================================================================
// Key prefixes
// ============================================================================

pub const NOTE_PREFIX: &str = "note#";

/// The kinds of item that can live in a user's partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Note,
}

impl ItemKind {
    /// Sort key prefix shared by every item of this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            ItemKind::Note => NOTE_PREFIX,
        }
    }
}

/// A typed sort key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SortKey {
    Note(String),
}

impl SortKey {
    /// Sort key for the note with the given id.
    pub fn note(id: impl Into<String>) -> Self {
        SortKey::Note(id.into())
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            SortKey::Note(_) => ItemKind::Note,
        }
    }

    /// The item id without its kind prefix.
    pub fn id(&self) -> &str {
        match self {
            SortKey::Note(id) => id,
        }
    }

    /// Serialize to the string stored in the table.
    ///
    /// Pattern: `<prefix><id>`, e.g. `note#ck9x2k1`.
    pub fn encode(&self) -> String {
        format!("{}{}", self.kind().prefix(), self.id())
    }

    /// Parse a stored sort key back into its typed form.
    pub fn parse(raw: &str) -> Result<Self, KeyError> {
        if let Some(id) = raw.strip_prefix(NOTE_PREFIX) {
            return Ok(SortKey::Note(id.to_string()));
        }
        Err(KeyError::UnknownKind(raw.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for SortKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::parse(s)
    }
}

/// Generate the sort key for a note id.
///
/// Pattern: `note#<id>`
pub fn id_to_sk(id: &str) -> String {
    SortKey::note(id).encode()
}

/// Recover a note id from its sort key.
///
/// Returns `None` when the key does not belong to a note.
pub fn sk_to_id(sk: &str) -> Option<String> {
    match SortKey::parse(sk) {
        Ok(SortKey::Note(id)) => Some(id),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_to_sk() {
        assert_eq!(id_to_sk("ck9x2k1"), "note#ck9x2k1");
    }

    #[test]
    fn test_sk_to_id() {
        assert_eq!(sk_to_id("note#ck9x2k1"), Some("ck9x2k1".to_string()));
    }

    #[test]
    fn test_sk_to_id_rejects_other_kinds() {
        assert_eq!(sk_to_id("list#ck9x2k1"), None);
        assert_eq!(sk_to_id("ck9x2k1"), None);
    }

    #[test]
    fn test_round_trip() {
        for id in [
            "ck9x2k1",
            "550e8400-e29b-41d4-a716-446655440001",
            "",
            "note#nested",
            "with spaces and ünïcode",
        ] {
            assert_eq!(sk_to_id(&id_to_sk(id)).as_deref(), Some(id));
        }
    }

    #[test]
    fn test_only_one_prefix_is_stripped() {
        let key = SortKey::parse("note#note#abc").unwrap();
        assert_eq!(key, SortKey::note("note#abc"));
        assert_eq!(key.encode(), "note#note#abc");
    }

    #[test]
    fn test_parse_unknown_kind() {
        assert_eq!(
            SortKey::parse("user#42"),
            Err(KeyError::UnknownKind("user#42".to_string()))
        );
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert!(SortKey::parse("NOTE#abc").is_err());
    }

    #[test]
    fn test_display_and_from_str() {
        let key: SortKey = "note#abc".parse().unwrap();
        assert_eq!(key.kind(), ItemKind::Note);
        assert_eq!(key.id(), "abc");
        assert_eq!(key.to_string(), "note#abc");
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(ItemKind::Note.prefix(), "note#");
    }
}
