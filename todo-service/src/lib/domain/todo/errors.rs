use thiserror::Error;

/// Error for TodoId validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoIdError {
    #[error("Todo id must not be empty")]
    Empty,
}

/// Top-level error for all todo-related operations
#[derive(Debug, Clone, Error)]
pub enum TodoError {
    #[error("Invalid todo id: {0}")]
    InvalidTodoId(#[from] TodoIdError),

    /// Ids are client-supplied and unique across the whole store,
    /// regardless of owner. A collision is a caller error, never a silent
    /// overwrite.
    #[error("Todo already exists: {0}")]
    DuplicateId(String),

    /// A missing id and an id owned by someone else are deliberately the
    /// same outcome, so existence of foreign items never leaks.
    #[error("Todo not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
