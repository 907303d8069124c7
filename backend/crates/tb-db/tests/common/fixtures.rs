use chrono::{DateTime, Duration, Utc};
use tb_core::{Project, Task, TaskStatus};
use uuid::Uuid;

/// Creates a test Project with the given name
pub fn create_test_project(name: &str) -> Project {
    Project::new(name.to_string())
}

/// Creates a test Task with sensible defaults
pub fn create_test_task(project_id: Uuid, title: &str) -> Task {
    Task::new(
        project_id,
        title.to_string(),
        Some("Test description".to_string()),
        TaskStatus::Todo,
    )
}

/// Creates a test Task whose timestamps are `offset_secs` after `base`
pub fn create_test_task_at(
    project_id: Uuid,
    title: &str,
    status: TaskStatus,
    base: DateTime<Utc>,
    offset_secs: i64,
) -> Task {
    let at = base + Duration::seconds(offset_secs);
    let mut task = Task::new(project_id, title.to_string(), None, status);
    task.created_at = at;
    task.updated_at = at;
    task
}
