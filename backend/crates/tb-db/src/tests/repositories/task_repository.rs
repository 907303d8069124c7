use crate::repositories::task_repository::update_statement;

use tb_core::{TaskChanges, TaskStatus};

use chrono::Utc;
use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_no_changes_when_statement_built_then_only_touches_updated_at() {
    let builder = update_statement(
        Uuid::new_v4(),
        Uuid::new_v4(),
        &TaskChanges::default(),
        Utc::now(),
    );

    assert_that!(
        builder.sql(),
        eq("UPDATE tasks SET updated_at = ? WHERE id = ? AND project_id = ?")
    );
}

#[test]
fn given_title_and_status_when_statement_built_then_sets_both_in_order() {
    let changes = TaskChanges {
        title: Some("Ship it".to_string()),
        description: None,
        status: Some(TaskStatus::Done),
    };

    let builder = update_statement(Uuid::new_v4(), Uuid::new_v4(), &changes, Utc::now());

    assert_that!(
        builder.sql(),
        eq("UPDATE tasks SET title = ?, status = ?, updated_at = ? WHERE id = ? AND project_id = ?")
    );
}

#[test]
fn given_cleared_description_when_statement_built_then_sets_description() {
    let changes = TaskChanges {
        title: None,
        description: Some(None),
        status: None,
    };

    let builder = update_statement(Uuid::new_v4(), Uuid::new_v4(), &changes, Utc::now());

    assert_that!(
        builder.sql(),
        eq("UPDATE tasks SET description = ?, updated_at = ? WHERE id = ? AND project_id = ?")
    );
}
