use crate::{CoreError, CoreResult, ErrorLocation};

use std::panic::Location;

use chrono::{NaiveDate, NaiveDateTime};

/// Wire format for backend-local timestamps (no zone designator).
pub const BACKEND_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a backend-local timestamp.
///
/// Accepts `2026-06-01T09:00:00`, `2026-06-01 09:00` or a bare date, which
/// means midnight.
#[track_caller]
pub fn parse_backend_timestamp(value: &str) -> CoreResult<NaiveDateTime> {
    let trimmed = value.trim();

    NaiveDateTime::parse_from_str(trimmed, BACKEND_DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| CoreError::InvalidTimestamp {
            value: value.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Format a timestamp the way the backend expects it
pub fn format_backend_timestamp(value: &NaiveDateTime) -> String {
    value.format(BACKEND_DATETIME_FORMAT).to_string()
}
