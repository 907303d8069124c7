#![allow(dead_code)]

use tb_core::{Project, Task};
use tb_service::{NewTask, ProjectService, TaskService};

use std::time::Duration;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let pool = tb_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");

    tb_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Both services over one fresh database
pub async fn create_test_services() -> (ProjectService, TaskService) {
    let pool = create_test_pool().await;
    (ProjectService::new(pool.clone()), TaskService::new(pool))
}

pub async fn create_test_project(projects: &ProjectService, name: &str) -> Project {
    projects
        .create_project(name)
        .await
        .expect("Failed to create test project")
}

pub fn new_task(title: &str) -> NewTask {
    NewTask {
        title: title.to_string(),
        ..NewTask::default()
    }
}

/// Creates tasks one after another, pausing so each gets a strictly later
/// `updated_at` than the previous one.
pub async fn create_tasks_in_order(
    tasks: &TaskService,
    project: &Project,
    titles: &[&str],
) -> Vec<Task> {
    let mut created = Vec::with_capacity(titles.len());
    for title in titles {
        let task = tasks
            .create_task(project.id, new_task(title))
            .await
            .expect("Failed to create test task");
        created.push(task);
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    created
}

pub fn titles(tasks: Vec<Task>) -> Vec<String> {
    tasks.into_iter().map(|t| t.title).collect()
}
