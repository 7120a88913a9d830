use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn set_todo_completed(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    Json(body): Json<SetTodoCompletedRequest>,
) -> Result<ApiSuccess<()>, ApiError> {
    let todo_id = TodoId::new(id).map_err(TodoError::from)?;

    state
        .todo_service
        .set_completed(&todo_id, &user.user_id, body.completed)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, ()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SetTodoCompletedRequest {
    completed: bool,
}
