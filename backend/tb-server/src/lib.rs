pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_logging;
pub mod routes;
pub mod seed;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    projects::{
        create_project_request::CreateProjectRequest,
        project_dto::ProjectDto,
        projects::{create_project, list_projects},
    },
    tasks::{
        create_task_request::CreateTaskRequest,
        list_tasks_query::ListTasksQuery,
        task_dto::TaskDto,
        tasks::{create_task, delete_task, get_task, list_tasks, update_task},
        update_task_request::UpdateTaskRequest,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
