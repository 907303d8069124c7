//! Project creation, listing and the existence guard used by task operations.

use crate::{Result as ServiceErrorResult, ServiceError};

use tb_core::{Project, normalize_project_name};
use tb_db::ProjectRepository;

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, warn};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ProjectService {
    repo: ProjectRepository,
}

impl ProjectService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: ProjectRepository::new(pool),
        }
    }

    pub async fn create_project(&self, raw_name: &str) -> ServiceErrorResult<Project> {
        let name = normalize_project_name(raw_name)?;
        let project = Project::new(name);

        debug!("Creating project {} ({})", project.id, project.name);

        match self.repo.create(&project).await {
            Ok(()) => Ok(project),
            Err(e) if e.is_constraint_violation("projects", "name") => {
                warn!("Project name already exists: {}", project.name);
                Err(ServiceError::ProjectNameExists {
                    name: project.name,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn list_projects(&self) -> ServiceErrorResult<Vec<Project>> {
        Ok(self.repo.find_all().await?)
    }

    /// Point-in-time check, repeated by every project-scoped task operation.
    pub async fn ensure_project_exists(&self, project_id: Uuid) -> ServiceErrorResult<()> {
        if self.repo.exists(project_id).await? {
            return Ok(());
        }

        debug!("Project {} not found", project_id);
        Err(ServiceError::ProjectNotFound {
            project_id,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
