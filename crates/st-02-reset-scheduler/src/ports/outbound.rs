//! Driven Ports (SPI - Outbound Dependencies)

use crate::error::ScheduleResult;
use chrono::NaiveDate;
use shared_types::{CalendarDateTime, DayOfWeek};

/// Source of "now" for the scheduler.
///
/// Implemented over the Time Source subsystem (1); callers must not assume
/// the host wall clock.
pub trait CurrentTimeProvider: Send + Sync {
    /// Fails with `TimeUnavailable` until the source is ready.
    fn current_time(&self) -> ScheduleResult<CalendarDateTime>;

    fn current_day_of_week(&self) -> ScheduleResult<DayOfWeek>;

    /// Day of week of `date` on the provider's calendar, without reading
    /// the clock again. Pair it with a `current_time` already in hand.
    fn day_of_week_on(&self, date: NaiveDate) -> ScheduleResult<DayOfWeek>;

    fn is_ready(&self) -> bool;
}

/// Opaque string key/value persistence owned by the host.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> ScheduleResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> ScheduleResult<()>;

    fn remove(&self, key: &str) -> ScheduleResult<()>;
}
