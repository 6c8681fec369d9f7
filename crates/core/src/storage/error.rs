use thiserror::Error;

/// Errors that can occur when parsing a stored sort key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("Unknown item kind in sort key: {0}")]
    UnknownKind(String),
}

/// Errors that can occur during table operations.
///
/// Backends map their native failures into one of these variants and keep the
/// original message; callers above the table never see backend error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<KeyError> for RepositoryError {
    fn from(err: KeyError) -> Self {
        RepositoryError::InvalidData(err.to_string())
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
