pub mod connection;
pub mod error;
pub mod repositories;
mod timestamp;

#[cfg(test)]
mod tests;

pub use connection::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::project_repository::ProjectRepository;
pub use repositories::task_list_query::{TaskListQuery, TaskPredicate};
pub use repositories::task_repository::TaskRepository;
