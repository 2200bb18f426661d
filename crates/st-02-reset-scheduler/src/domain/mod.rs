//! Domain module for the Reset Scheduler subsystem
//!
//! ## Core Modules
//! - calendar: fixed-day advancers (day, week, 31-day month, 365-day year)
//! - config: daily / weekly reset configuration and weekly offset policy
//! - schedule: next reset moments and time remaining
//! - claim: Locked / Claimable state per reset kind
//! - countdown: countdown text

pub mod calendar;
pub mod claim;
pub mod config;
pub mod countdown;
pub mod schedule;

pub use calendar::{add_days, next_day, next_month, next_week, next_year};
pub use claim::{ClaimState, ResetKind, ResetStatus};
pub use config::{DailyResetConfig, SchedulerConfig, WeeklyOffsetPolicy, WeeklyResetConfig};
pub use countdown::format_countdown;
pub use schedule::{time_remaining, weekly_offset, ResetScheduler};
