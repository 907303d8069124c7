use tb_core::{Task, TaskStatus};

use chrono::SecondsFormat;
use serde::Serialize;

/// Task DTO for JSON serialization. `description` is always present,
/// `null` when absent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Task> for TaskDto {
    fn from(t: Task) -> Self {
        Self {
            id: t.id.to_string(),
            project_id: t.project_id.to_string(),
            title: t.title,
            description: t.description,
            status: t.status,
            created_at: t.created_at.to_rfc3339_opts(SecondsFormat::Nanos, true),
            updated_at: t.updated_at.to_rfc3339_opts(SecondsFormat::Nanos, true),
        }
    }
}
