use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::TodoItem;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for owner-scoped todo operations.
pub struct TodoService<TR>
where
    TR: TodoRepository,
{
    repository: Arc<TR>,
}

impl<TR> TodoService<TR>
where
    TR: TodoRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TodoServicePort for TodoService<TR>
where
    TR: TodoRepository,
{
    async fn list_todos(&self, owner_id: &UserId) -> Result<Vec<TodoItem>, TodoError> {
        self.repository.list_by_owner(owner_id).await
    }

    async fn create_todo(&self, command: CreateTodoCommand) -> Result<TodoItem, TodoError> {
        let item = TodoItem {
            id: command.id,
            owner_id: command.owner_id,
            text: command.text,
            completed: command.completed,
            created_at: command.created_at,
        };

        self.repository.insert(item).await
    }

    async fn set_completed(
        &self,
        id: &TodoId,
        owner_id: &UserId,
        completed: bool,
    ) -> Result<(), TodoError> {
        self.repository.set_completed(id, owner_id, completed).await
    }

    async fn delete_todo(&self, id: &TodoId, owner_id: &UserId) -> Result<(), TodoError> {
        self.repository.delete(id, owner_id).await
    }
}
