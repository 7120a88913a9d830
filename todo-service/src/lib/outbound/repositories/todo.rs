use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::TodoItem;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::user::models::UserId;

pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn storage_err(e: sqlx::Error) -> TodoError {
    TodoError::DatabaseError(e.to_string())
}

fn map_row(row: &SqliteRow) -> Result<TodoItem, TodoError> {
    let id: String = row.try_get("id").map_err(storage_err)?;
    let owner_id: String = row.try_get("owner_id").map_err(storage_err)?;
    let text: String = row.try_get("text").map_err(storage_err)?;
    let completed: bool = row.try_get("completed").map_err(storage_err)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(storage_err)?;

    Ok(TodoItem {
        id: TodoId::new(id)?,
        owner_id: UserId::from_string(&owner_id)
            .map_err(|e| TodoError::DatabaseError(e.to_string()))?,
        text,
        completed,
        created_at,
    })
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn insert(&self, item: TodoItem) -> Result<TodoItem, TodoError> {
        sqlx::query(
            r#"
            INSERT INTO todos (id, owner_id, text, completed, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(item.id.as_str())
        .bind(item.owner_id.to_string())
        .bind(&item.text)
        .bind(item.completed)
        .bind(item.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // The primary key is the only unique constraint on this table,
            // and it spans all owners.
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return TodoError::DuplicateId(item.id.to_string());
                }
            }
            TodoError::DatabaseError(e.to_string())
        })?;

        Ok(item)
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<TodoItem>, TodoError> {
        // rowid order is insertion order for this table
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, text, completed, created_at
            FROM todos
            WHERE owner_id = ?1
            ORDER BY rowid
            "#,
        )
        .bind(owner_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(storage_err)?;

        rows.iter().map(map_row).collect()
    }

    async fn set_completed(
        &self,
        id: &TodoId,
        owner_id: &UserId,
        completed: bool,
    ) -> Result<(), TodoError> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET completed = ?3
            WHERE id = ?1 AND owner_id = ?2
            "#,
        )
        .bind(id.as_str())
        .bind(owner_id.to_string())
        .bind(completed)
        .execute(&self.pool)
        .await
        .map_err(storage_err)?;

        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn delete(&self, id: &TodoId, owner_id: &UserId) -> Result<(), TodoError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = ?1 AND owner_id = ?2
            "#,
        )
        .bind(id.as_str())
        .bind(owner_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(storage_err)?;

        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
