use tb_service::TaskPatch;

use serde::Deserialize;

/// Partial update; absent and `null` fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,

    /// A blank string clears the description
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub status: Option<String>,
}

impl From<UpdateTaskRequest> for TaskPatch {
    fn from(req: UpdateTaskRequest) -> Self {
        TaskPatch {
            title: req.title,
            description: req.description,
            status: req.status,
        }
    }
}
