use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::todo::models::TodoItem;
use crate::domain::todo::ports::TodoServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_todos(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<TodoData>>, ApiError> {
    state
        .todo_service
        .list_todos(&user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|items| {
            ApiSuccess::new(StatusCode::OK, items.iter().map(TodoData::from).collect())
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoData {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&TodoItem> for TodoData {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id.to_string(),
            text: item.text.clone(),
            completed: item.completed,
            created_at: item.created_at,
        }
    }
}
