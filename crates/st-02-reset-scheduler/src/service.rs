//! Reset Scheduler Service - deadlines, refresh ticks and claims

use std::sync::Arc;

use parking_lot::RwLock;
use shared_types::{format_moment, parse_moment, CalendarDateTime, DayOfWeek};
use tracing::{info, warn};

use crate::domain::{ResetKind, ResetScheduler, ResetStatus, SchedulerConfig};
use crate::error::{ScheduleError, ScheduleResult};
use crate::metrics;
use crate::ports::inbound::{ResetOverview, ResetSchedulerApi};
use crate::ports::outbound::{CurrentTimeProvider, KeyValueStore};

/// Reset Scheduler implementation
///
/// Deadlines live in the injected store under `ResetKind::storage_key`, in
/// the persisted moment format. A deadline is created the first time it is
/// needed and replaced only by a claim.
pub struct ResetSchedulerService<T, S>
where
    T: CurrentTimeProvider,
    S: KeyValueStore,
{
    scheduler: RwLock<ResetScheduler>,
    time: Arc<T>,
    store: Arc<S>,
}

impl<T, S> ResetSchedulerService<T, S>
where
    T: CurrentTimeProvider,
    S: KeyValueStore,
{
    pub fn new(config: SchedulerConfig, time: Arc<T>, store: Arc<S>) -> Self {
        Self {
            scheduler: RwLock::new(ResetScheduler::new(config)),
            time,
            store,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.time.is_ready()
    }

    fn next_reset_at(&self, kind: ResetKind, current: CalendarDateTime) -> ScheduleResult<CalendarDateTime> {
        let scheduler = *self.scheduler.read();
        match kind {
            ResetKind::Daily => scheduler.next_daily_reset(current),
            ResetKind::Weekly => {
                // Weekday of `current` itself; a second clock read could
                // already be past midnight.
                let today = self.time.day_of_week_on(current.date())?;
                scheduler.next_weekly_reset(current, today)
            }
        }
    }

    fn store_deadline(&self, kind: ResetKind, deadline: CalendarDateTime) -> ScheduleResult<()> {
        self.store.set(kind.storage_key(), &format_moment(&deadline))
    }

    fn deadline_at(&self, kind: ResetKind, current: CalendarDateTime) -> ScheduleResult<CalendarDateTime> {
        let key = kind.storage_key();

        if let Some(raw) = self.store.get(key)? {
            match parse_moment(&raw) {
                Ok(deadline) => return Ok(deadline),
                Err(e) => warn!("[st-02] Discarding unreadable {} deadline '{}': {}", kind, raw, e),
            }
        }

        let deadline = self.next_reset_at(kind, current)?;
        self.store_deadline(kind, deadline)?;
        info!(kind = kind.label(), deadline = %deadline, "[st-02] Reset deadline initialised");
        Ok(deadline)
    }

    fn status_at(&self, kind: ResetKind, current: CalendarDateTime) -> ScheduleResult<ResetStatus> {
        let deadline = self.deadline_at(kind, current)?;
        Ok(ResetStatus::new(kind, deadline, current))
    }
}

impl<T, S> ResetSchedulerApi for ResetSchedulerService<T, S>
where
    T: CurrentTimeProvider,
    S: KeyValueStore,
{
    fn set_daily_reset_time(&self, hour: u32, minute: u32, second: u32) -> ScheduleResult<()> {
        self.scheduler.write().set_daily_reset_time(hour, minute, second)
    }

    fn set_weekly_reset_time(
        &self,
        day: DayOfWeek,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> ScheduleResult<()> {
        self.scheduler
            .write()
            .set_weekly_reset_time(day, hour, minute, second)
    }

    fn config(&self) -> SchedulerConfig {
        self.scheduler.read().config()
    }

    fn next_reset(&self, kind: ResetKind) -> ScheduleResult<CalendarDateTime> {
        let current = self.time.current_time()?;
        self.next_reset_at(kind, current)
    }

    fn deadline(&self, kind: ResetKind) -> ScheduleResult<CalendarDateTime> {
        let current = self.time.current_time()?;
        self.deadline_at(kind, current)
    }

    fn status(&self, kind: ResetKind) -> ScheduleResult<ResetStatus> {
        let current = self.time.current_time()?;
        self.status_at(kind, current)
    }

    fn refresh(&self) -> ScheduleResult<ResetOverview> {
        let current = self.time.current_time()?;
        Ok(ResetOverview {
            current_time: current,
            daily: self.status_at(ResetKind::Daily, current)?,
            weekly: self.status_at(ResetKind::Weekly, current)?,
        })
    }

    fn claim(&self, kind: ResetKind) -> ScheduleResult<CalendarDateTime> {
        let current = self.time.current_time()?;
        let status = self.status_at(kind, current)?;

        if !status.is_claimable() {
            metrics::record_claim_rejected(kind.label());
            return Err(ScheduleError::NotClaimable {
                kind,
                remaining_secs: status.remaining.num_seconds(),
            });
        }

        let next = self.next_reset_at(kind, current)?;
        self.store_deadline(kind, next)?;
        metrics::record_claim(kind.label());
        info!(
            kind = kind.label(),
            claimed_at = %current,
            next_deadline = %next,
            "[st-02] Reward claimed"
        );
        Ok(next)
    }
}
