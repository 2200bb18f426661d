//! Settable time provider for tests and offline demo mode.

use chrono::{Datelike, NaiveDate};
use parking_lot::RwLock;
use shared_types::{CalendarDateTime, DayOfWeek};

use crate::error::{ScheduleError, ScheduleResult};
use crate::ports::outbound::CurrentTimeProvider;

/// Reports whatever time it was last given. Day of week follows the date.
#[derive(Default)]
pub struct FixedTimeProvider {
    now: RwLock<Option<CalendarDateTime>>,
}

impl FixedTimeProvider {
    /// Provider that is not ready yet.
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn at(now: CalendarDateTime) -> Self {
        Self {
            now: RwLock::new(Some(now)),
        }
    }

    pub fn set(&self, now: CalendarDateTime) {
        *self.now.write() = Some(now);
    }
}

impl CurrentTimeProvider for FixedTimeProvider {
    fn current_time(&self) -> ScheduleResult<CalendarDateTime> {
        (*self.now.read()).ok_or_else(|| ScheduleError::TimeUnavailable {
            reason: "fixed time not set".to_string(),
        })
    }

    fn current_day_of_week(&self) -> ScheduleResult<DayOfWeek> {
        self.day_of_week_on(self.current_time()?.date())
    }

    fn day_of_week_on(&self, date: NaiveDate) -> ScheduleResult<DayOfWeek> {
        Ok(DayOfWeek::from(date.weekday()))
    }

    fn is_ready(&self) -> bool {
        self.now.read().is_some()
    }
}
