//! Driving Ports (API - Inbound)

use crate::domain::{ResetKind, ResetStatus, SchedulerConfig};
use crate::error::ScheduleResult;
use shared_types::{CalendarDateTime, DayOfWeek};

/// Both reset kinds at one refresh tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResetOverview {
    pub current_time: CalendarDateTime,
    pub daily: ResetStatus,
    pub weekly: ResetStatus,
}

impl ResetOverview {
    pub fn get(&self, kind: ResetKind) -> &ResetStatus {
        match kind {
            ResetKind::Daily => &self.daily,
            ResetKind::Weekly => &self.weekly,
        }
    }
}

/// Primary Reset Scheduler API
///
/// Every call is a synchronous read-and-compute; polling it on each UI tick
/// is cheap and idempotent for a given current time.
pub trait ResetSchedulerApi: Send + Sync {
    fn set_daily_reset_time(&self, hour: u32, minute: u32, second: u32) -> ScheduleResult<()>;

    fn set_weekly_reset_time(
        &self,
        day: DayOfWeek,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> ScheduleResult<()>;

    fn config(&self) -> SchedulerConfig;

    /// Next reset computed from the current time, not persisted.
    fn next_reset(&self, kind: ResetKind) -> ScheduleResult<CalendarDateTime>;

    /// Stored deadline, initialised from `next_reset` when absent.
    fn deadline(&self, kind: ResetKind) -> ScheduleResult<CalendarDateTime>;

    fn status(&self, kind: ResetKind) -> ScheduleResult<ResetStatus>;

    /// Status of both kinds against a single current-time reading.
    fn refresh(&self) -> ScheduleResult<ResetOverview>;

    /// Claim a claimable reward: store the next deadline and lock again.
    fn claim(&self, kind: ResetKind) -> ScheduleResult<CalendarDateTime>;
}
