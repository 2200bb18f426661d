//! Reset moment arithmetic
//!
//! No time-zone conversion and no DST handling: every input is a naive
//! calendar moment in the reference zone.
//!
//! Two boundary behaviours hold:
//!
//! - the daily reset is always on the calendar day after `current`, even if
//!   today's reset time has not been reached yet;
//! - with the `Literal` weekly policy, a target day equal to today yields a
//!   reset seven days out, never today.

use chrono::TimeDelta;
use shared_types::{CalendarDateTime, DayOfWeek, TimeOfDay};

use super::calendar::{add_days, DAYS_PER_WEEK};
use super::config::{DailyResetConfig, SchedulerConfig, WeeklyOffsetPolicy, WeeklyResetConfig};
use crate::error::ScheduleResult;

/// Days from `today` until the weekly reset on `target`.
pub fn weekly_offset(today: DayOfWeek, target: DayOfWeek, policy: WeeklyOffsetPolicy) -> i64 {
    let raw = (DAYS_PER_WEEK - i64::from(today.index())) + i64::from(target.index());
    match policy {
        WeeklyOffsetPolicy::Literal => {
            if raw > DAYS_PER_WEEK {
                raw - DAYS_PER_WEEK
            } else {
                raw
            }
        }
        WeeklyOffsetPolicy::Modular => raw % DAYS_PER_WEEK,
    }
}

/// `reset - current`. Zero or negative means the reset is claimable.
pub fn time_remaining(reset: CalendarDateTime, current: CalendarDateTime) -> TimeDelta {
    reset.signed_duration_since(current)
}

/// Daily and weekly reset configuration plus the arithmetic over it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResetScheduler {
    daily: DailyResetConfig,
    weekly: WeeklyResetConfig,
    weekly_policy: WeeklyOffsetPolicy,
}

impl ResetScheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            daily: config.daily,
            weekly: config.weekly,
            weekly_policy: config.weekly_policy,
        }
    }

    pub fn config(&self) -> SchedulerConfig {
        SchedulerConfig {
            daily: self.daily,
            weekly: self.weekly,
            weekly_policy: self.weekly_policy,
        }
    }

    /// Set the daily reset time. Out-of-range values are rejected and the
    /// previous setting is kept.
    pub fn set_daily_reset_time(&mut self, hour: u32, minute: u32, second: u32) -> ScheduleResult<()> {
        self.daily = DailyResetConfig::new(TimeOfDay::new(hour, minute, second)?);
        Ok(())
    }

    /// Set the weekly reset day and time. Out-of-range values are rejected
    /// and the previous setting is kept.
    pub fn set_weekly_reset_time(
        &mut self,
        day: DayOfWeek,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> ScheduleResult<()> {
        self.weekly = WeeklyResetConfig::new(day, TimeOfDay::new(hour, minute, second)?);
        Ok(())
    }

    pub fn set_weekly_policy(&mut self, policy: WeeklyOffsetPolicy) {
        self.weekly_policy = policy;
    }

    pub fn daily(&self) -> DailyResetConfig {
        self.daily
    }

    pub fn weekly(&self) -> WeeklyResetConfig {
        self.weekly
    }

    pub fn weekly_policy(&self) -> WeeklyOffsetPolicy {
        self.weekly_policy
    }

    /// Configured daily time on the day after `current`'s date.
    pub fn next_daily_reset(&self, current: CalendarDateTime) -> ScheduleResult<CalendarDateTime> {
        let tomorrow = add_days(current, 1)?.date();
        Ok(self.daily.time.on(tomorrow))
    }

    /// Configured weekly time, `weekly_offset` days after `current`'s date.
    pub fn next_weekly_reset(
        &self,
        current: CalendarDateTime,
        current_day_of_week: DayOfWeek,
    ) -> ScheduleResult<CalendarDateTime> {
        let offset = weekly_offset(current_day_of_week, self.weekly.day, self.weekly_policy);
        let target = add_days(current, offset)?.date();
        Ok(self.weekly.time.on(target))
    }
}
