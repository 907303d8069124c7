mod task_list_query;
mod task_repository;
