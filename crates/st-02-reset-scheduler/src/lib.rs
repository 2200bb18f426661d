//! # st-02-reset-scheduler
//!
//! Daily and weekly reward reset deadlines on top of the Time Source.
//!
//! ## Overview
//!
//! - **Next reset**: daily = configured time on the next calendar day;
//!   weekly = configured time `weekly_offset(today, target)` days ahead
//! - **Deadlines**: persisted per kind, created on first use, replaced on claim
//! - **Claim state**: `Locked` while time remains, `Claimable` once the
//!   remaining time is zero or negative
//! - **Countdown**: `hh:mm:ss` for daily, `dd:hh:mm:ss` for weekly
//!
//! ## Flow
//!
//! ```text
//! tick ──refresh()──→ ResetSchedulerService ──current_time()──→ CurrentTimeProvider
//!                           │
//!                           ├── get/set deadline ──→ KeyValueStore (memory / JSON file)
//!                           │
//!                           └── ResetOverview { daily, weekly }
//!
//! claim(kind): Claimable ──→ store next reset ──→ Locked
//!              Locked    ──→ NotClaimable
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use st_02_reset_scheduler::*;
//!
//! let scheduler = ResetSchedulerService::new(
//!     SchedulerConfig::default(),
//!     Arc::new(TimeSourceAdapter::new(time_source)),
//!     Arc::new(JsonFileKeyValueStore::open("prefs.json")?),
//! );
//!
//! let overview = scheduler.refresh()?;
//! println!("{}", overview.daily.display_text());
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

pub use adapters::{
    FixedTimeProvider, InMemoryKeyValueStore, JsonFileKeyValueStore, TimeSourceAdapter,
};
pub use domain::{
    add_days, format_countdown, next_day, next_month, next_week, next_year, time_remaining,
    weekly_offset, ClaimState, DailyResetConfig, ResetKind, ResetScheduler, ResetStatus,
    SchedulerConfig, WeeklyOffsetPolicy, WeeklyResetConfig,
};
pub use error::{ScheduleError, ScheduleResult};
pub use ports::inbound::{ResetOverview, ResetSchedulerApi};
pub use ports::outbound::{CurrentTimeProvider, KeyValueStore};
pub use service::ResetSchedulerService;
