//! Fetched time snapshot and the monotonic offset model
//!
//! Current time = fetched timestamp + monotonic time elapsed since the fetch.
//! The host wall clock is never consulted, so local clock adjustments do not
//! move the result.

use std::time::Instant;

use chrono::{NaiveDate, TimeDelta};
use shared_types::{CalendarDateTime, DayOfWeek};

use crate::error::{TimeSourceError, TimeSourceResult};

/// Immutable result of one successful fetch.
///
/// Replaced wholesale by the next successful fetch; never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedTime {
    timestamp: CalendarDateTime,
    day_of_week: DayOfWeek,
    fetched_at: Instant,
}

impl FetchedTime {
    pub fn new(timestamp: CalendarDateTime, day_of_week: DayOfWeek, fetched_at: Instant) -> Self {
        Self {
            timestamp,
            day_of_week,
            fetched_at,
        }
    }

    /// Authoritative timestamp as reported by the API.
    pub fn timestamp(&self) -> CalendarDateTime {
        self.timestamp
    }

    /// Day of week as reported by the API.
    pub fn day_of_week(&self) -> DayOfWeek {
        self.day_of_week
    }

    /// Monotonic reading taken when the response arrived.
    pub fn fetched_at(&self) -> Instant {
        self.fetched_at
    }

    /// Extrapolate the timestamp to the monotonic reading `now`.
    ///
    /// Readings earlier than `fetched_at` count as zero elapsed time.
    pub fn current_time_at(&self, now: Instant) -> TimeSourceResult<CalendarDateTime> {
        let elapsed = now.saturating_duration_since(self.fetched_at);
        let delta = TimeDelta::from_std(elapsed).map_err(|_| TimeSourceError::ClockOverflow)?;
        self.timestamp
            .checked_add_signed(delta)
            .ok_or(TimeSourceError::ClockOverflow)
    }

    /// Reported day of week carried forward to `date`.
    pub fn day_of_week_on(&self, date: NaiveDate) -> DayOfWeek {
        let days = date.signed_duration_since(self.timestamp.date()).num_days();
        self.day_of_week.advance(days)
    }
}
