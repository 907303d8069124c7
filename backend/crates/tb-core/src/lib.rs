pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::project::Project;
pub use models::task::Task;
pub use models::task_changes::TaskChanges;
pub use models::task_status::TaskStatus;
pub use validation::{
    DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, MAX_PROJECT_NAME_LENGTH, MAX_TASK_TITLE_LENGTH,
    MIN_PAGE_LIMIT, clamp_pagination_limit, normalize_description, normalize_offset,
    normalize_project_name, normalize_status, normalize_task_title,
};
