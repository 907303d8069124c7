//! Project REST API handlers

use crate::{ApiResult, AppState, CreateProjectRequest, ProjectDto};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /projects
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProjectDto>)> {
    let Json(req) = payload?;

    let project = state.projects.create_project(&req.name).await?;

    Ok((StatusCode::CREATED, Json(project.into())))
}

/// GET /projects
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectDto>>> {
    let projects = state.projects.list_projects().await?;

    Ok(Json(projects.into_iter().map(ProjectDto::from).collect()))
}
