//! Error types for the Time Source subsystem

use thiserror::Error;

/// Time Source subsystem errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeSourceError {
    /// Connection failure or timeout talking to the time API
    #[error("Transport failure for {url}: {reason}")]
    Transport { url: String, reason: String },

    /// The time API answered with a non-success status
    #[error("Time API {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Body did not contain a usable `datetime` / `day_of_week` pair
    #[error("Malformed time API response: {reason}")]
    MalformedBody { reason: String },

    /// No fetch has completed yet
    #[error("Time not yet available - no successful fetch has completed")]
    NotReady,

    /// Source was shut down while a fetch was pending
    #[error("Time fetch cancelled by shutdown")]
    Cancelled,

    /// Configured attempt cap reached
    #[error("Gave up after {attempts} attempts: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },

    /// Elapsed monotonic time does not fit a calendar offset
    #[error("Elapsed time overflowed the calendar range")]
    ClockOverflow,

    /// Rejected configuration
    #[error("Invalid time source configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl TimeSourceError {
    /// Whether the fetch loop should try again after this error.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TimeSourceError::Transport { .. }
                | TimeSourceError::Status { .. }
                | TimeSourceError::MalformedBody { .. }
        )
    }

    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            TimeSourceError::Transport { .. } => "transport",
            TimeSourceError::Status { .. } => "status",
            TimeSourceError::MalformedBody { .. } => "malformed_body",
            TimeSourceError::NotReady => "not_ready",
            TimeSourceError::Cancelled => "cancelled",
            TimeSourceError::RetriesExhausted { .. } => "retries_exhausted",
            TimeSourceError::ClockOverflow => "clock_overflow",
            TimeSourceError::InvalidConfig { .. } => "invalid_config",
        }
    }
}

/// Result type for time source operations
pub type TimeSourceResult<T> = Result<T, TimeSourceError>;
