//! Error types for the Reset Scheduler subsystem

use shared_types::CalendarError;
use thiserror::Error;

use crate::domain::ResetKind;

/// Reset Scheduler subsystem errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Hour, minute or second out of range
    #[error("Invalid reset time {hour:02}:{minute:02}:{second:02}")]
    InvalidTimeOfDay { hour: u32, minute: u32, second: u32 },

    /// Day-of-week index out of range
    #[error("Invalid day of week: {0}")]
    InvalidDayOfWeek(String),

    /// Date arithmetic left the representable calendar
    #[error("Date out of range: {base} + {days} days")]
    DateOutOfRange { base: String, days: i64 },

    /// Claim attempted while the reset is still locked
    #[error("{kind} reward not claimable for another {remaining_secs}s")]
    NotClaimable { kind: ResetKind, remaining_secs: i64 },

    /// Key/value store failure
    #[error("Storage error: {reason}")]
    Storage { reason: String },

    /// Stored value could not be read back
    #[error("Cannot parse stored value for '{key}': {reason}")]
    Parse { key: String, reason: String },

    /// Current time not available (source not ready)
    #[error("Current time unavailable: {reason}")]
    TimeUnavailable { reason: String },
}

impl From<CalendarError> for ScheduleError {
    fn from(err: CalendarError) -> Self {
        match err {
            CalendarError::InvalidTimeOfDay {
                hour,
                minute,
                second,
            } => ScheduleError::InvalidTimeOfDay {
                hour,
                minute,
                second,
            },
            CalendarError::InvalidDayOfWeek(_) | CalendarError::UnknownDayName(_) => {
                ScheduleError::InvalidDayOfWeek(err.to_string())
            }
            CalendarError::InvalidMoment { input, reason } => ScheduleError::Parse {
                key: input,
                reason,
            },
        }
    }
}

/// Result type for scheduler operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;
