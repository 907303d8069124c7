use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    /// A UNIQUE constraint rejected the write.
    #[error("Constraint violation on {table}.{column} {location}")]
    ConstraintViolation {
        table: String,
        column: String,
        location: ErrorLocation,
    },

    /// A stored row could not be mapped back to a domain entity.
    #[error("Decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// True if this is a unique violation on exactly `table.column`.
    pub fn is_constraint_violation(&self, on_table: &str, on_column: &str) -> bool {
        matches!(
            self,
            DbError::ConstraintViolation { table, column, .. }
                if table == on_table && column == on_column
        )
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if let sqlx::Error::Database(ref database_error) = source
            && database_error.is_unique_violation()
            && let Some((table, column)) = unique_violation_target(database_error.message())
        {
            return Self::ConstraintViolation {
                table,
                column,
                location,
            };
        }

        Self::Sqlx { source, location }
    }
}

/// Extract `(table, column)` from SQLite's
/// `UNIQUE constraint failed: table.column[, table.column...]`.
/// Composite keys report their first column.
pub(crate) fn unique_violation_target(message: &str) -> Option<(String, String)> {
    let (_, targets) = message.split_once(": ")?;
    let first = targets.split(", ").next()?;
    let (table, column) = first.trim().split_once('.')?;

    if table.is_empty() || column.is_empty() {
        return None;
    }

    Some((table.to_string(), column.to_string()))
}

pub type Result<T> = std::result::Result<T, DbError>;
