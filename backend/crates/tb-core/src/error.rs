use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Input that failed local validation. Never requires a store round trip.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("project name is required {location}")]
    EmptyName { location: ErrorLocation },

    #[error("project name is too long (max {max}, got {actual}) {location}")]
    NameTooLong {
        max: usize,
        actual: usize,
        location: ErrorLocation,
    },

    #[error("title is required {location}")]
    EmptyTitle { location: ErrorLocation },

    #[error("title too long (max {max}, got {actual}) {location}")]
    TitleTooLong {
        max: usize,
        actual: usize,
        location: ErrorLocation,
    },

    #[error("invalid status '{value}'; use TODO|IN_PROGRESS|DONE {location}")]
    InvalidStatus {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName { .. } | Self::NameTooLong { .. } => "name",
            Self::EmptyTitle { .. } | Self::TitleTooLong { .. } => "title",
            Self::InvalidStatus { .. } => "status",
        }
    }

    /// Client-facing message without the source location.
    pub fn message(&self) -> String {
        match self {
            Self::EmptyName { .. } => "project name is required".to_string(),
            Self::NameTooLong { max, .. } => format!("project name is too long (max {max})"),
            Self::EmptyTitle { .. } => "title is required".to_string(),
            Self::TitleTooLong { max, .. } => format!("title too long (max {max})"),
            Self::InvalidStatus { .. } => "invalid status; use TODO|IN_PROGRESS|DONE".to_string(),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
