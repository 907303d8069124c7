use crate::{TaskChanges, TaskStatus};

#[test]
fn test_default_changes_are_empty() {
    assert!(TaskChanges::default().is_empty());
}

#[test]
fn test_any_field_makes_changes_non_empty() {
    let title = TaskChanges {
        title: Some("New".to_string()),
        ..Default::default()
    };
    let cleared_description = TaskChanges {
        description: Some(None),
        ..Default::default()
    };
    let status = TaskChanges {
        status: Some(TaskStatus::Done),
        ..Default::default()
    };

    assert!(!title.is_empty());
    assert!(!cleared_description.is_empty());
    assert!(!status.is_empty());
}
