pub mod error;
pub mod projects;
pub mod tasks;
