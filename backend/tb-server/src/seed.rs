//! Fixed demo project inserted at startup.

use tb_core::Project;
use tb_db::{DbError, ProjectRepository};

use chrono::Utc;
use log::info;
use sqlx::SqlitePool;
use uuid::{Uuid, uuid};

pub const DEMO_PROJECT_ID: Uuid = uuid!("aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa");
pub const DEMO_PROJECT_NAME: &str = "Demo Project";

/// Insert the demo project unless its id or name is already taken.
/// Returns true if it was created.
pub async fn ensure_demo_project(pool: &SqlitePool) -> Result<bool, DbError> {
    let now = Utc::now();
    let project = Project {
        id: DEMO_PROJECT_ID,
        name: DEMO_PROJECT_NAME.to_string(),
        created_at: now,
        updated_at: now,
    };

    let created = ProjectRepository::new(pool.clone())
        .create_if_absent(&project)
        .await?;
    if created {
        info!("Created demo project: {} ({})", DEMO_PROJECT_NAME, DEMO_PROJECT_ID);
    }

    Ok(created)
}
