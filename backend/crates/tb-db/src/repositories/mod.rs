pub mod project_repository;
pub mod task_list_query;
pub mod task_repository;
