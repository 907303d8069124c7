//! Task REST API handlers
//!
//! Every route is nested under its project; ids arrive as raw path strings
//! and are parsed here so a malformed id is a 400, not a routing miss.

use crate::{
    ApiResult, AppState, CreateTaskRequest, ListTasksQuery, TaskDto, UpdateTaskRequest,
};

use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /projects/{projectId}/tasks?status&q&limit&offset
pub async fn list_tasks(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    query: Result<Query<ListTasksQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<TaskDto>>> {
    let project_id = Uuid::parse_str(&project_id)?;
    let Query(query) = query?;

    let tasks = state.tasks.list_tasks(project_id, query.into()).await?;

    Ok(Json(tasks.into_iter().map(TaskDto::from).collect()))
}

/// POST /projects/{projectId}/tasks
pub async fn create_task(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TaskDto>)> {
    let project_id = Uuid::parse_str(&project_id)?;
    let Json(req) = payload?;

    let task = state.tasks.create_task(project_id, req.into()).await?;

    Ok((StatusCode::CREATED, Json(task.into())))
}

/// GET /projects/{projectId}/tasks/{taskId}
pub async fn get_task(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(String, String)>,
) -> ApiResult<Json<TaskDto>> {
    let project_id = Uuid::parse_str(&project_id)?;
    let task_id = Uuid::parse_str(&task_id)?;

    let task = state.tasks.get_task(task_id, project_id).await?;

    Ok(Json(task.into()))
}

/// PUT /projects/{projectId}/tasks/{taskId}
///
/// An empty body is an empty patch and returns the task unchanged.
pub async fn update_task(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(String, String)>,
    body: Bytes,
) -> ApiResult<Json<TaskDto>> {
    let project_id = Uuid::parse_str(&project_id)?;
    let task_id = Uuid::parse_str(&task_id)?;

    let req = if body.iter().all(u8::is_ascii_whitespace) {
        UpdateTaskRequest::default()
    } else {
        serde_json::from_slice::<UpdateTaskRequest>(&body)?
    };

    let task = state
        .tasks
        .update_task(task_id, project_id, req.into())
        .await?;

    Ok(Json(task.into()))
}

/// DELETE /projects/{projectId}/tasks/{taskId}
pub async fn delete_task(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    let project_id = Uuid::parse_str(&project_id)?;
    let task_id = Uuid::parse_str(&task_id)?;

    state.tasks.delete_task(task_id, project_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
