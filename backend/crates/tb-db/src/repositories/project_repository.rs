//! Project repository.
//!
//! Projects are only ever created and listed; `exists` is the ownership guard
//! task operations run before touching task rows.

use crate::{DbError, Result as DbErrorResult, timestamp};

use tb_core::Project;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a project. A duplicate name surfaces as
    /// `DbError::ConstraintViolation { table: "projects", column: "name" }`.
    pub async fn create(&self, project: &Project) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO projects (id, name, created_at, updated_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.name)
        .bind(timestamp::encode(&project.created_at))
        .bind(timestamp::encode(&project.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert unless a project with the same id or name already exists.
    /// Returns true if a row was written.
    pub async fn create_if_absent(&self, project: &Project) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                INSERT OR IGNORE INTO projects (id, name, created_at, updated_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.name)
        .bind(timestamp::encode(&project.created_at))
        .bind(timestamp::encode(&project.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All projects, most recently updated first, ties broken by name.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, created_at, updated_at
                FROM projects
                ORDER BY updated_at DESC, name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(project_from_row).collect()
    }

    pub async fn exists(&self, id: Uuid) -> DbErrorResult<bool> {
        let row = sqlx::query("SELECT 1 FROM projects WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }
}

fn project_from_row(row: &SqliteRow) -> DbErrorResult<Project> {
    let id: String = row.try_get("id")?;
    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(Project {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Decode {
            message: format!("Invalid UUID in projects.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        name: row.try_get("name")?,
        created_at: timestamp::decode(&created_at, "projects.created_at")?,
        updated_at: timestamp::decode(&updated_at, "projects.updated_at")?,
    })
}
