use tb_core::Project;

use chrono::SecondsFormat;
use serde::Serialize;

/// Project DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            created_at: p.created_at.to_rfc3339_opts(SecondsFormat::Nanos, true),
            updated_at: p.updated_at.to_rfc3339_opts(SecondsFormat::Nanos, true),
        }
    }
}
