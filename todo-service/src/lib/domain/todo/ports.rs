use async_trait::async_trait;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::TodoItem;
use crate::domain::user::models::UserId;

/// Port for todo domain service operations.
///
/// Every operation takes the verified owner identity; there is no way to
/// reach another user's items through this surface.
#[async_trait]
pub trait TodoServicePort: Send + Sync + 'static {
    /// List all items owned by `owner_id`, in insertion order.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_todos(&self, owner_id: &UserId) -> Result<Vec<TodoItem>, TodoError>;

    /// Create a new item owned by the command's owner.
    ///
    /// # Errors
    /// * `DuplicateId` - Id already exists anywhere in the store
    /// * `DatabaseError` - Database operation failed
    async fn create_todo(&self, command: CreateTodoCommand) -> Result<TodoItem, TodoError>;

    /// Set the completion flag of an item owned by `owner_id`.
    ///
    /// # Errors
    /// * `NotFound` - No item matches both id and owner
    /// * `DatabaseError` - Database operation failed
    async fn set_completed(
        &self,
        id: &TodoId,
        owner_id: &UserId,
        completed: bool,
    ) -> Result<(), TodoError>;

    /// Delete an item owned by `owner_id`.
    ///
    /// Safe to retry: a repeated call reports `NotFound`, which callers
    /// may treat as success-equivalent.
    ///
    /// # Errors
    /// * `NotFound` - No item matches both id and owner
    /// * `DatabaseError` - Database operation failed
    async fn delete_todo(&self, id: &TodoId, owner_id: &UserId) -> Result<(), TodoError>;
}

/// Persistence operations for the todo aggregate.
///
/// The owner parameter on every read and mutation is what enforces
/// cross-user isolation; no method offers unscoped access.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// Persist a new item to storage.
    ///
    /// # Errors
    /// * `DuplicateId` - Id already exists anywhere in the store; storage
    ///   is left unchanged
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, item: TodoItem) -> Result<TodoItem, TodoError>;

    /// Retrieve all items owned by `owner_id`, in insertion order.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<TodoItem>, TodoError>;

    /// Update the completion flag of the row matching both id and owner.
    ///
    /// Single-statement update; a matching id under a different owner is
    /// reported as `NotFound`.
    ///
    /// # Errors
    /// * `NotFound` - No row matches both id and owner
    /// * `DatabaseError` - Database operation failed
    async fn set_completed(
        &self,
        id: &TodoId,
        owner_id: &UserId,
        completed: bool,
    ) -> Result<(), TodoError>;

    /// Remove the row matching both id and owner.
    ///
    /// # Errors
    /// * `NotFound` - No row matches both id and owner
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &TodoId, owner_id: &UserId) -> Result<(), TodoError>;
}
