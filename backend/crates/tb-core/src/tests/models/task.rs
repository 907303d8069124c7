use crate::{Task, TaskStatus};

use uuid::Uuid;

#[test]
fn test_task_new() {
    let project_id = Uuid::new_v4();
    let task = Task::new(
        project_id,
        "Write docs".to_string(),
        Some("README first".to_string()),
        TaskStatus::InProgress,
    );

    assert_eq!(task.project_id, project_id);
    assert_eq!(task.title, "Write docs");
    assert_eq!(task.description.as_deref(), Some("README first"));
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.created_at, task.updated_at);
}

#[test]
fn test_task_new_assigns_unique_ids() {
    let project_id = Uuid::new_v4();
    let first = Task::new(project_id, "T1".to_string(), None, TaskStatus::Todo);
    let second = Task::new(project_id, "T1".to_string(), None, TaskStatus::Todo);

    assert_ne!(first.id, second.id);
    assert!(first.description.is_none());
}
