use tb_service::NewTask;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Missing reads as empty and fails validation
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Case-insensitive; absent means the default status
    #[serde(default)]
    pub status: Option<String>,
}

impl From<CreateTaskRequest> for NewTask {
    fn from(req: CreateTaskRequest) -> Self {
        NewTask {
            title: req.title,
            description: req.description,
            status: req.status,
        }
    }
}
