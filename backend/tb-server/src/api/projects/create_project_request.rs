use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    /// Missing reads as empty and fails validation
    #[serde(default)]
    pub name: String,
}
