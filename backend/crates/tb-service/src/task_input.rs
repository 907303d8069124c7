//! Raw, unvalidated task input as received from callers, and its conversion
//! into validated values. Every check here is local; none touches the store.

use tb_core::{
    Result as CoreErrorResult, TaskChanges, TaskStatus, clamp_pagination_limit,
    normalize_description, normalize_offset, normalize_task_title,
};
use tb_db::TaskListQuery;

use std::str::FromStr;

use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to TODO when absent
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<String>,
    /// Title substring, trimmed; blank is treated as absent
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Partial update. Absent fields are left untouched; a description that is
/// blank after trimming clears the stored description.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

pub(crate) struct ValidNewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
}

impl NewTask {
    pub(crate) fn validate(self) -> CoreErrorResult<ValidNewTask> {
        let title = normalize_task_title(&self.title)?;
        let status = match self.status {
            Some(raw) => TaskStatus::from_str(&raw)?,
            None => TaskStatus::default(),
        };
        let description = self.description.as_deref().and_then(normalize_description);

        Ok(ValidNewTask {
            title,
            description,
            status,
        })
    }
}

impl TaskFilter {
    pub(crate) fn into_query(self, project_id: Uuid) -> CoreErrorResult<TaskListQuery> {
        let mut query = TaskListQuery::new(project_id).paginate(
            clamp_pagination_limit(self.limit),
            normalize_offset(self.offset),
        );

        if let Some(raw) = self.status {
            query = query.with_status(TaskStatus::from_str(&raw)?);
        }
        if let Some(ref needle) = self.q {
            query = query.with_title_containing(needle.trim());
        }

        Ok(query)
    }
}

impl TaskPatch {
    pub(crate) fn into_changes(self) -> CoreErrorResult<TaskChanges> {
        let title = self
            .title
            .as_deref()
            .map(normalize_task_title)
            .transpose()?;
        let status = self
            .status
            .as_deref()
            .map(TaskStatus::from_str)
            .transpose()?;
        let description = self.description.as_deref().map(normalize_description);

        Ok(TaskChanges {
            title,
            description,
            status,
        })
    }
}
