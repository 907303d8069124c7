mod project;
mod task;
mod task_changes;
mod task_status;
