use crate::{CoreError, TaskStatus};

use std::str::FromStr;

#[test]
fn test_task_status_as_str() {
    assert_eq!(TaskStatus::Todo.as_str(), "TODO");
    assert_eq!(TaskStatus::InProgress.as_str(), "IN_PROGRESS");
    assert_eq!(TaskStatus::Done.as_str(), "DONE");
}

#[test]
fn test_task_status_from_str_is_case_insensitive() {
    assert_eq!(TaskStatus::from_str("todo").unwrap(), TaskStatus::Todo);
    assert_eq!(
        TaskStatus::from_str(" In_Progress ").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(TaskStatus::from_str("DONE").unwrap(), TaskStatus::Done);
}

#[test]
fn test_task_status_from_str_rejects_unknown() {
    let result = TaskStatus::from_str("PENDING");

    assert!(matches!(result, Err(CoreError::InvalidStatus { ref value, .. }) if value == "PENDING"));
}

#[test]
fn test_task_status_default() {
    assert_eq!(TaskStatus::default(), TaskStatus::Todo);
}
