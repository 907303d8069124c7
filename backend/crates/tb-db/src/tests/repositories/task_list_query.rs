use crate::repositories::task_list_query::like_pattern;
use crate::{TaskListQuery, TaskPredicate};

use tb_core::{DEFAULT_PAGE_LIMIT, TaskStatus};

use googletest::prelude::*;
use uuid::Uuid;

const COLUMNS: &str = "id, project_id, title, description, status, created_at, updated_at";

#[test]
fn given_new_query_when_inspected_then_first_default_page() {
    let project_id = Uuid::new_v4();

    let query = TaskListQuery::new(project_id);

    assert_that!(query.project_id(), eq(project_id));
    assert_that!(query.limit(), eq(DEFAULT_PAGE_LIMIT));
    assert_that!(query.offset(), eq(0));
}

#[test]
fn given_no_filters_when_predicates_built_then_only_project() {
    let project_id = Uuid::new_v4();

    let predicates = TaskListQuery::new(project_id).predicates();

    assert_that!(predicates, eq(&vec![TaskPredicate::Project(project_id)]));
}

#[test]
fn given_filters_in_any_order_when_predicates_built_then_canonical_order() {
    let project_id = Uuid::new_v4();

    let a = TaskListQuery::new(project_id)
        .with_title_containing("report")
        .with_status(TaskStatus::Done);
    let b = TaskListQuery::new(project_id)
        .with_status(TaskStatus::Done)
        .with_title_containing("report");

    let expected = vec![
        TaskPredicate::Status(TaskStatus::Done),
        TaskPredicate::TitleContains("report".to_string()),
        TaskPredicate::Project(project_id),
    ];
    assert_that!(a.predicates(), eq(&expected));
    assert_that!(b.predicates(), eq(&expected));
    assert_that!(a.to_query_builder().sql(), eq(b.to_query_builder().sql()));
}

#[test]
fn given_empty_needle_when_added_then_ignored() {
    let project_id = Uuid::new_v4();

    let query = TaskListQuery::new(project_id).with_title_containing("");

    assert_that!(query.predicates(), len(eq(1)));
}

#[test]
fn given_no_filters_when_rendered_then_project_scoped_and_ordered() {
    let query = TaskListQuery::new(Uuid::new_v4());

    let builder = query.to_query_builder();

    assert_that!(
        builder.sql(),
        eq(format!(
            "SELECT {} FROM tasks WHERE project_id = ? ORDER BY updated_at DESC, id ASC LIMIT ? OFFSET ?",
            COLUMNS
        ))
    );
}

#[test]
fn given_all_filters_when_rendered_then_status_then_title_then_project() {
    let query = TaskListQuery::new(Uuid::new_v4())
        .with_status(TaskStatus::InProgress)
        .with_title_containing("deploy")
        .paginate(10, 20);

    let builder = query.to_query_builder();

    assert_that!(
        builder.sql(),
        eq(format!(
            "SELECT {} FROM tasks WHERE status = ? AND title LIKE ? ESCAPE '\\' AND project_id = ? ORDER BY updated_at DESC, id ASC LIMIT ? OFFSET ?",
            COLUMNS
        ))
    );
}

#[test]
fn given_plain_needle_when_patterned_then_wrapped_in_wildcards() {
    assert_that!(like_pattern("deploy"), eq("%deploy%"));
}

#[test]
fn given_needle_with_wildcards_when_patterned_then_escaped() {
    assert_that!(like_pattern("50%_off"), eq("%50\\%\\_off%"));
    assert_that!(like_pattern("a\\b"), eq("%a\\\\b%"));
}
