pub mod error;
pub mod project_service;
pub mod task_input;
pub mod task_service;


pub use error::{ErrorKind, Result, ServiceError};
pub use project_service::ProjectService;
pub use task_input::{NewTask, TaskFilter, TaskPatch};
pub use task_service::TaskService;
