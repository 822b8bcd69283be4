//! Todo CRUD handlers.
//!
//! Identity and update rules live in [`TodoRepository`]; these handlers only
//! translate between HTTP and repository results.
//!
//! [`TodoRepository`]: todoapi_core::storage::TodoRepository

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use todoapi_core::storage::RepositoryError;
use todoapi_core::todo::{Todo, TodoInput};

use crate::{handlers::AppError, state::AppState};

/// Error response with message (for request body errors).
fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, String) {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, msg)
}

/// Unwraps a JSON body, answering 400 for anything that cannot be parsed.
fn parse_body(body: Result<Json<TodoInput>, JsonRejection>) -> Result<TodoInput, Response> {
    body.map(|Json(input)| input).map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("Invalid todo: {}", e.body_text()))
            .into_response()
    })
}

/// Location of a todo resource.
pub fn todo_location(id: &str) -> String {
    format!("/todoitems/{id}")
}

/// List all todos (GET /todoitems).
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    tracing::debug!("Received list todos request");

    let todos = state.todos.get_all().await?;
    Ok(Json(todos))
}

/// List completed todos (GET /todoitems/complete).
pub async fn list_complete_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<Todo>>, AppError> {
    tracing::debug!("Received list complete todos request");

    let todos = state.todos.get_complete().await?;
    Ok(Json(todos))
}

/// Get a single todo by ID (GET /todoitems/{id}).
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    tracing::debug!(todo_id = %id, "Received get todo request");

    match state.todos.get_by_id(&id).await? {
        Some(todo) => Ok(Json(todo)),
        None => Err(RepositoryError::todo_not_found(id).into()),
    }
}

/// Create a new todo (POST /todoitems).
///
/// Any `id` in the body is discarded; the response carries the assigned one
/// and a `Location` header pointing at the new resource.
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<TodoInput>, JsonRejection>,
) -> Result<Response, Response> {
    let input = parse_body(body)?;
    tracing::debug!(payload = ?input, "Received create todo request");

    let todo = state
        .todos
        .create(input)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    tracing::info!(todo_id = %todo.id, "Created todo");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, todo_location(&todo.id))],
        Json(todo),
    )
        .into_response())
}

/// Update a todo by ID (PUT /todoitems/{id}).
///
/// Only `name` and `isComplete` are taken from the body.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TodoInput>, JsonRejection>,
) -> Result<StatusCode, Response> {
    let input = parse_body(body)?;
    tracing::debug!(todo_id = %id, payload = ?input, "Received update todo request");

    let updated = state
        .todos
        .update(&id, input)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    match updated {
        Some(todo) => {
            tracing::info!(todo_id = %todo.id, "Updated todo");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(AppError::from(RepositoryError::todo_not_found(id)).into_response()),
    }
}

/// Delete a todo by ID (DELETE /todoitems/{id}).
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    tracing::debug!(todo_id = %id, "Received delete todo request");

    if state.todos.delete(&id).await? {
        tracing::info!(todo_id = %id, "Deleted todo");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(RepositoryError::todo_not_found(id).into())
    }
}
