use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::todo::errors::TodoIdError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_todo(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateTodoRequest>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .todo_service
        .create_todo(body.try_into_command(user.user_id)?)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::CREATED, ()))
}

/// HTTP request body for creating a todo item (raw JSON).
///
/// The id and creation timestamp are supplied by the client; the owner
/// always comes from the verified identity, never from the body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    id: String,
    text: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateTodoRequestError {
    #[error("Invalid todo id: {0}")]
    TodoId(#[from] TodoIdError),
}

impl CreateTodoRequest {
    fn try_into_command(
        self,
        owner_id: UserId,
    ) -> Result<CreateTodoCommand, ParseCreateTodoRequestError> {
        let id = TodoId::new(self.id)?;
        Ok(CreateTodoCommand::new(
            id,
            owner_id,
            self.text,
            self.completed,
            self.created_at,
        ))
    }
}

impl From<ParseCreateTodoRequestError> for ApiError {
    fn from(err: ParseCreateTodoRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
