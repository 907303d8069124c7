use tb_core::CoreError;
use tb_db::DbError;

use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

/// Coarse classification callers map to transport status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    StorageFailure,
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error("Project not found: {project_id} {location}")]
    ProjectNotFound {
        project_id: Uuid,
        location: ErrorLocation,
    },

    /// Also returned when the task exists under a different project.
    #[error("Task not found: {task_id} in project {project_id} {location}")]
    TaskNotFound {
        task_id: Uuid,
        project_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Project name already exists: {name} {location}")]
    ProjectNameExists {
        name: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Storage(#[from] DbError),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::ProjectNotFound { .. } | Self::TaskNotFound { .. } => ErrorKind::NotFound,
            Self::ProjectNameExists { .. } => ErrorKind::Conflict,
            Self::Storage(_) => ErrorKind::StorageFailure,
        }
    }
}

pub type Result<T> = StdResult<T, ServiceError>;
