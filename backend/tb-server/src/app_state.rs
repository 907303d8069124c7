use tb_service::{ProjectService, TaskService};

use sqlx::SqlitePool;

/// Shared handler state. Services only hold the pool, so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    pub projects: ProjectService,
    pub tasks: TaskService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            projects: ProjectService::new(pool.clone()),
            tasks: TaskService::new(pool),
        }
    }
}
