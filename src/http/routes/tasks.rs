//! Task CRUD route handlers.
//!
//! Each handler is a single-pass mapping from one request to one
//! response. Three behaviours are contractual, not accidental:
//!
//! - A request body that fails to decode collapses to a zero-valued
//!   field set unless strict body validation is enabled.
//! - Update and delete against an unknown or malformed identifier
//!   complete as successful no-ops; a malformed identifier selects no
//!   document.
//! - Single-item lookup maps every failure to 404; all other handlers
//!   map storage failures to 500.

use crate::http::{ApiError, ApiState};
use crate::task::{
    domain::{Task, TaskFields, TaskId},
    ports::TaskRepository,
    services::TaskServiceError,
};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use mockable::Clock;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, error};

fn storage_failure(err: &TaskServiceError) -> ApiError {
    error!(error = %err, "storage operation failed");
    ApiError::Storage(err.to_string())
}

fn decode_fields(body: &Bytes, strict: bool) -> Result<TaskFields, ApiError> {
    if strict {
        serde_json::from_slice(body).map_err(|err| ApiError::BadRequest(err.to_string()))
    } else {
        Ok(serde_json::from_slice(body).unwrap_or_default())
    }
}

/// `GET /tasks` — returns every stored task as a JSON array.
pub async fn list_tasks<R, C>(
    State(state): State<Arc<ApiState<R, C>>>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = state
        .service
        .list()
        .await
        .map_err(|err| storage_failure(&err))?;
    Ok(Json(tasks))
}

/// `POST /tasks` — creates a task and acknowledges with the generated id.
pub async fn create_task<R, C>(
    State(state): State<Arc<ApiState<R, C>>>,
    body: Bytes,
) -> Result<Json<Value>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let fields = decode_fields(&body, state.strict_body)?;
    let task = state
        .service
        .create(fields)
        .await
        .map_err(|err| storage_failure(&err))?;
    debug!(id = %task.id(), "task created");
    Ok(Json(json!({ "inserted_id": task.id() })))
}

/// `GET /tasks/{id}` — returns the addressed task.
///
/// Every failure of this lookup surfaces as 404, storage failures
/// included; only non-lookup operations map storage failures to 500.
pub async fn get_task<R, C>(
    State(state): State<Arc<ApiState<R, C>>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = TaskId::parse(&id).map_err(|err| ApiError::NotFound(err.to_string()))?;
    let task = state
        .service
        .get(task_id)
        .await
        .map_err(|err| {
            error!(error = %err, "storage lookup failed");
            ApiError::NotFound(err.to_string())
        })?
        .ok_or_else(|| ApiError::NotFound(format!("task not found: {task_id}")))?;
    Ok(Json(task))
}

/// `PUT /tasks/{id}` — replaces title, description, and status.
///
/// The response echoes the submitted fields rather than re-reading
/// stored state.
pub async fn update_task<R, C>(
    State(state): State<Arc<ApiState<R, C>>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<TaskFields>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let fields = decode_fields(&body, state.strict_body)?;
    if let Ok(task_id) = TaskId::parse(&id) {
        state
            .service
            .update(task_id, &fields)
            .await
            .map_err(|err| storage_failure(&err))?;
    } else {
        debug!(id = %id, "malformed identifier selects no document");
    }
    Ok(Json(fields))
}

/// `DELETE /tasks/{id}` — hard-deletes the addressed task.
pub async fn delete_task<R, C>(
    State(state): State<Arc<ApiState<R, C>>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    if let Ok(task_id) = TaskId::parse(&id) {
        state
            .service
            .delete(task_id)
            .await
            .map_err(|err| storage_failure(&err))?;
    } else {
        debug!(id = %id, "malformed identifier selects no document");
    }
    Ok(Json(json!({ "message": "Task deleted successfully" })))
}
