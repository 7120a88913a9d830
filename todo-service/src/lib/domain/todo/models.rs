use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::todo::errors::TodoIdError;
use crate::domain::user::models::UserId;

/// Todo item aggregate entity.
///
/// Bound to exactly one owning user at creation; the owner reference is
/// immutable and only `completed` changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub owner_id: UserId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Todo unique identifier type
///
/// Client-supplied opaque string, unique across the whole store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoId(String);

impl TodoId {
    /// Create a new todo id.
    ///
    /// # Errors
    /// * `Empty` - Id is the empty string
    pub fn new(id: String) -> Result<Self, TodoIdError> {
        if id.is_empty() {
            return Err(TodoIdError::Empty);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new todo item for a verified owner
#[derive(Debug)]
pub struct CreateTodoCommand {
    pub id: TodoId,
    pub owner_id: UserId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl CreateTodoCommand {
    pub fn new(
        id: TodoId,
        owner_id: UserId,
        text: String,
        completed: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            text,
            completed,
            created_at,
        }
    }
}
