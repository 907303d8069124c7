//! Task repository.
//!
//! Every lookup and write that targets a single task is keyed by both the
//! task id and the owning project id, so a task is unreachable through any
//! other project.

use crate::repositories::task_list_query::TASK_COLUMNS;
use crate::{DbError, Result as DbErrorResult, TaskListQuery, timestamp};

use tb_core::{Task, TaskChanges, TaskStatus};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, task: &Task) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO tasks (
                    id, project_id, title, description, status, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.id.to_string())
        .bind(task.project_id.to_string())
        .bind(&task.title)
        .bind(task.description.as_deref())
        .bind(task.status.as_str())
        .bind(timestamp::encode(&task.created_at))
        .bind(timestamp::encode(&task.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Fetch by composite key. `None` when the task does not exist or belongs
    /// to another project.
    pub async fn find_in_project(
        &self,
        task_id: Uuid,
        project_id: Uuid,
    ) -> DbErrorResult<Option<Task>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM tasks WHERE id = ? AND project_id = ?",
            TASK_COLUMNS
        ))
        .bind(task_id.to_string())
        .bind(project_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(task_from_row).transpose()
    }

    pub async fn list(&self, query: &TaskListQuery) -> DbErrorResult<Vec<Task>> {
        let rows = query
            .to_query_builder()
            .build()
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(task_from_row).collect()
    }

    /// Write only the changed columns plus `updated_at`.
    /// Returns the number of rows affected (0 or 1).
    pub async fn update(
        &self,
        task_id: Uuid,
        project_id: Uuid,
        changes: &TaskChanges,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<u64> {
        let result = update_statement(task_id, project_id, changes, updated_at)
            .build()
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Hard delete by composite key. Returns the number of rows affected.
    pub async fn delete(&self, task_id: Uuid, project_id: Uuid) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ? AND project_id = ?")
            .bind(task_id.to_string())
            .bind(project_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

pub(crate) fn update_statement(
    task_id: Uuid,
    project_id: Uuid,
    changes: &TaskChanges,
    updated_at: DateTime<Utc>,
) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new("UPDATE tasks SET ");

    {
        let mut assignments = builder.separated(", ");
        if let Some(ref title) = changes.title {
            assignments.push("title = ");
            assignments.push_bind_unseparated(title.clone());
        }
        if let Some(ref description) = changes.description {
            assignments.push("description = ");
            assignments.push_bind_unseparated(description.clone());
        }
        if let Some(status) = changes.status {
            assignments.push("status = ");
            assignments.push_bind_unseparated(status.as_str());
        }
        assignments.push("updated_at = ");
        assignments.push_bind_unseparated(timestamp::encode(&updated_at));
    }

    builder.push(" WHERE id = ");
    builder.push_bind(task_id.to_string());
    builder.push(" AND project_id = ");
    builder.push_bind(project_id.to_string());

    builder
}

fn task_from_row(row: &SqliteRow) -> DbErrorResult<Task> {
    let id: String = row.try_get("id")?;
    let project_id: String = row.try_get("project_id")?;
    let status: String = row.try_get("status")?;
    let description: Option<String> = row.try_get("description")?;
    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(Task {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Decode {
            message: format!("Invalid UUID in tasks.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        project_id: Uuid::parse_str(&project_id).map_err(|e| DbError::Decode {
            message: format!("Invalid UUID in tasks.project_id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        title: row.try_get("title")?,
        // Rows written before normalization may hold empty strings
        description: description.filter(|d| !d.trim().is_empty()),
        status: TaskStatus::from_str(&status).map_err(|e| DbError::Decode {
            message: format!("Invalid TaskStatus in tasks.status: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        created_at: timestamp::decode(&created_at, "tasks.created_at")?,
        updated_at: timestamp::decode(&updated_at, "tasks.updated_at")?,
    })
}
