//! # Persisted Moment Codec
//!
//! Reset deadlines are handed to the host as plain strings and read back on
//! the next session start. The format keeps whole seconds only.

use chrono::NaiveDateTime;

use crate::entities::CalendarDateTime;
use crate::errors::{CalendarError, CalendarResult};

/// Format written by [`format_moment`].
pub const PERSISTED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Also accepted on read.
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Render a moment in its persisted form. Sub-second precision is dropped.
pub fn format_moment(moment: &CalendarDateTime) -> String {
    moment.format(PERSISTED_FORMAT).to_string()
}

/// Read a moment previously written by [`format_moment`].
///
/// The `T`-separated ISO form is accepted as well.
pub fn parse_moment(input: &str) -> CalendarResult<CalendarDateTime> {
    let trimmed = input.trim();
    NaiveDateTime::parse_from_str(trimmed, PERSISTED_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, ISO_FORMAT))
        .map_err(|e| CalendarError::InvalidMoment {
            input: input.to_string(),
            reason: e.to_string(),
        })
}
