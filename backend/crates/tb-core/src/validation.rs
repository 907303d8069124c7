//! Pure validation and normalization of client input.
//!
//! Every function here runs before any store access. Lengths are counted in
//! characters, not bytes.

use crate::{CoreError, Result as CoreErrorResult, TaskStatus};

use std::panic::Location;

use error_location::ErrorLocation;

pub const MAX_PROJECT_NAME_LENGTH: usize = 128;
pub const MAX_TASK_TITLE_LENGTH: usize = 200;

pub const MIN_PAGE_LIMIT: i64 = 1;
pub const MAX_PAGE_LIMIT: i64 = 200;
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Trim a project name and check it is non-empty and at most 128 characters.
#[track_caller]
pub fn normalize_project_name(raw: &str) -> CoreErrorResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CoreError::EmptyName {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let length = name.chars().count();
    if length > MAX_PROJECT_NAME_LENGTH {
        return Err(CoreError::NameTooLong {
            max: MAX_PROJECT_NAME_LENGTH,
            actual: length,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(name.to_string())
}

/// Trim a task title and check it is non-empty and at most 200 characters.
#[track_caller]
pub fn normalize_task_title(raw: &str) -> CoreErrorResult<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(CoreError::EmptyTitle {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let length = title.chars().count();
    if length > MAX_TASK_TITLE_LENGTH {
        return Err(CoreError::TitleTooLong {
            max: MAX_TASK_TITLE_LENGTH,
            actual: length,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(title.to_string())
}

/// Case-insensitive status parse. Only TODO, IN_PROGRESS and DONE are accepted.
pub fn normalize_status(raw: &str) -> Option<TaskStatus> {
    match raw.trim().to_uppercase().as_str() {
        "TODO" => Some(TaskStatus::Todo),
        "IN_PROGRESS" => Some(TaskStatus::InProgress),
        "DONE" => Some(TaskStatus::Done),
        _ => None,
    }
}

/// Trim a description; blank means "no description".
pub fn normalize_description(raw: &str) -> Option<String> {
    let description = raw.trim();
    if description.is_empty() {
        None
    } else {
        Some(description.to_string())
    }
}

/// Absent or zero yields the default page size, anything else is clamped
/// into `[MIN_PAGE_LIMIT, MAX_PAGE_LIMIT]`.
pub fn clamp_pagination_limit(raw: Option<i64>) -> i64 {
    match raw {
        None | Some(0) => DEFAULT_PAGE_LIMIT,
        Some(limit) => limit.clamp(MIN_PAGE_LIMIT, MAX_PAGE_LIMIT),
    }
}

/// Absent or negative offsets become 0.
pub fn normalize_offset(raw: Option<i64>) -> i64 {
    raw.filter(|offset| *offset >= 0).unwrap_or(0)
}
