//! # Error Types
//!
//! Errors raised while building or parsing calendar values.

use thiserror::Error;

/// Errors raised by the calendar vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Hour, minute or second outside its clock range.
    #[error("Invalid time of day: {hour:02}:{minute:02}:{second:02}")]
    InvalidTimeOfDay { hour: u32, minute: u32, second: u32 },

    /// Day-of-week index outside 0..=6.
    #[error("Invalid day of week index: {0} (expected 0-6)")]
    InvalidDayOfWeek(i64),

    /// Unrecognised day-of-week name.
    #[error("Unknown day of week: {0}")]
    UnknownDayName(String),

    /// A string could not be read as a calendar moment.
    #[error("Cannot parse moment '{input}': {reason}")]
    InvalidMoment { input: String, reason: String },
}

/// Result type for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
