//! Fixed-day calendar advancers
//!
//! Month and year are deliberately approximated as 31 and 365 days. Callers
//! rely on these fixed spans, so they are not calendar-accurate.

use chrono::TimeDelta;
use shared_types::CalendarDateTime;

use crate::error::{ScheduleError, ScheduleResult};

pub const DAYS_PER_WEEK: i64 = 7;
pub const DAYS_PER_MONTH: i64 = 31;
pub const DAYS_PER_YEAR: i64 = 365;

/// `moment` shifted by `days` whole days (negative goes back).
pub fn add_days(moment: CalendarDateTime, days: i64) -> ScheduleResult<CalendarDateTime> {
    TimeDelta::try_days(days)
        .and_then(|delta| moment.checked_add_signed(delta))
        .ok_or_else(|| ScheduleError::DateOutOfRange {
            base: moment.to_string(),
            days,
        })
}

pub fn next_day(moment: CalendarDateTime) -> ScheduleResult<CalendarDateTime> {
    add_days(moment, 1)
}

pub fn next_week(moment: CalendarDateTime) -> ScheduleResult<CalendarDateTime> {
    add_days(moment, DAYS_PER_WEEK)
}

/// Always +31 days, whatever the month.
pub fn next_month(moment: CalendarDateTime) -> ScheduleResult<CalendarDateTime> {
    add_days(moment, DAYS_PER_MONTH)
}

/// Always +365 days, leap years included.
pub fn next_year(moment: CalendarDateTime) -> ScheduleResult<CalendarDateTime> {
    add_days(moment, DAYS_PER_YEAR)
}
