pub mod project;
pub mod task;
pub mod task_changes;
pub mod task_status;
