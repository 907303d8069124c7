//! Task lifecycle within a project.
//!
//! Each operation validates its input first, then re-checks that the parent
//! project exists, and only then touches task rows. Tasks are always addressed
//! by `(task_id, project_id)`, so a task under another project reads as missing.

use crate::{NewTask, ProjectService, Result as ServiceErrorResult, ServiceError, TaskFilter, TaskPatch};

use tb_core::Task;
use tb_db::TaskRepository;

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use log::debug;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Clone)]
pub struct TaskService {
    tasks: TaskRepository,
    projects: ProjectService,
}

impl TaskService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            tasks: TaskRepository::new(pool.clone()),
            projects: ProjectService::new(pool),
        }
    }

    pub async fn create_task(&self, project_id: Uuid, input: NewTask) -> ServiceErrorResult<Task> {
        let valid = input.validate()?;
        self.projects.ensure_project_exists(project_id).await?;

        let task = Task::new(project_id, valid.title, valid.description, valid.status);
        debug!("Creating task {} in project {}", task.id, project_id);
        self.tasks.create(&task).await?;

        Ok(task)
    }

    pub async fn get_task(&self, task_id: Uuid, project_id: Uuid) -> ServiceErrorResult<Task> {
        self.projects.ensure_project_exists(project_id).await?;
        self.find_existing(task_id, project_id).await
    }

    pub async fn list_tasks(
        &self,
        project_id: Uuid,
        filter: TaskFilter,
    ) -> ServiceErrorResult<Vec<Task>> {
        let query = filter.into_query(project_id)?;
        self.projects.ensure_project_exists(project_id).await?;

        debug!(
            "Listing tasks in project {} (limit {}, offset {})",
            project_id,
            query.limit(),
            query.offset()
        );
        Ok(self.tasks.list(&query).await?)
    }

    /// An empty patch returns the task unchanged, without bumping `updated_at`.
    pub async fn update_task(
        &self,
        task_id: Uuid,
        project_id: Uuid,
        patch: TaskPatch,
    ) -> ServiceErrorResult<Task> {
        let changes = patch.into_changes()?;
        self.projects.ensure_project_exists(project_id).await?;

        if changes.is_empty() {
            return self.find_existing(task_id, project_id).await;
        }

        debug!("Updating task {} in project {}", task_id, project_id);
        let affected = self
            .tasks
            .update(task_id, project_id, &changes, Utc::now())
            .await?;
        if affected == 0 {
            return Err(task_not_found(task_id, project_id));
        }

        self.find_existing(task_id, project_id).await
    }

    /// Not idempotent: deleting an already deleted task is `TaskNotFound`.
    pub async fn delete_task(&self, task_id: Uuid, project_id: Uuid) -> ServiceErrorResult<()> {
        self.projects.ensure_project_exists(project_id).await?;

        debug!("Deleting task {} in project {}", task_id, project_id);
        match self.tasks.delete(task_id, project_id).await? {
            0 => Err(task_not_found(task_id, project_id)),
            _ => Ok(()),
        }
    }

    async fn find_existing(&self, task_id: Uuid, project_id: Uuid) -> ServiceErrorResult<Task> {
        self.tasks
            .find_in_project(task_id, project_id)
            .await?
            .ok_or_else(|| task_not_found(task_id, project_id))
    }
}

#[track_caller]
fn task_not_found(task_id: Uuid, project_id: Uuid) -> ServiceError {
    ServiceError::TaskNotFound {
        task_id,
        project_id,
        location: ErrorLocation::from(Location::caller()),
    }
}
