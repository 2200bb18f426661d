//! ST-Admin: Server-Time host CLI
//!
//! Owns the Time Source and the Reset Scheduler, fetches server time once
//! at startup and then polls the scheduler on an interval.
//!
//! ```text
//! $ st-admin watch
//! 2020-08-14 15:54:04 | Daily 08:05:56 | Weekly 01:08:05:56
//! 2020-08-14 15:54:05 | Daily 08:05:55 | Weekly 01:08:05:55
//!
//! $ st-admin claim daily
//! Daily reward claimed; next reset 2020-08-16 00:00:00
//! ```

pub mod app;
pub mod cli;
pub mod render;

pub use app::{is_cancelled, App};
pub use cli::{Args, Command, KindArg, PolicyArg};
