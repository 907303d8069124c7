//! Timestamps are stored as fixed-width RFC 3339 UTC text with nanoseconds,
//! e.g. `2026-01-02T03:04:05.123456789Z`.

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, SecondsFormat, Utc};
use error_location::ErrorLocation;

pub(crate) fn encode(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

#[track_caller]
pub(crate) fn decode(raw: &str, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| DbError::Decode {
            message: format!("Invalid timestamp in {}: {}", column, e),
            location: ErrorLocation::from(Location::caller()),
        })
}
