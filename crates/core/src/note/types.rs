use serde::{Deserialize, Serialize};

/// A short text note owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub user_id: String,
    pub slug: String,
    pub title: String,
    pub body: String,
}

/// Projection of a note used by list views. Carries no body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteListItem {
    pub id: String,
    pub slug: String,
    pub title: String,
}

/// Fields supplied by the caller when creating a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub user_id: String,
    pub slug: String,
    pub title: String,
    pub body: String,
}

impl NewNote {
    pub fn new(
        user_id: impl Into<String>,
        slug: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            slug: slug.into(),
            title: title.into(),
            body: body.into(),
        }
    }

    /// Attaches a generated id, producing the full note.
    pub fn with_id(self, id: impl Into<String>) -> Note {
        Note {
            id: id.into(),
            user_id: self.user_id,
            slug: self.slug,
            title: self.title,
            body: self.body,
        }
    }
}
