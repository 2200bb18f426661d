//! Driving Ports (API - Inbound)

use std::sync::Arc;

use crate::domain::FetchedTime;
use crate::error::TimeSourceResult;
use async_trait::async_trait;
use shared_types::{CalendarDateTime, DayOfWeek};

/// Primary Time Source API
///
/// One fetch runs at a time. Readers never block on a fetch in progress;
/// they see the previous snapshot until the new one is installed.
#[async_trait]
pub trait TimeSourceApi: Send + Sync {
    /// Fetch from the configured URL, retrying per policy until success,
    /// cancellation or the attempt cap.
    async fn fetch(&self) -> TimeSourceResult<Arc<FetchedTime>>;

    /// Point the source at `url` and fetch. Later `fetch` calls reuse it.
    async fn fetch_from(&self, url: &str) -> TimeSourceResult<Arc<FetchedTime>>;

    /// Fetched timestamp plus monotonic time elapsed since the fetch.
    ///
    /// Fails with `NotReady` before the first successful fetch.
    fn current_time(&self) -> TimeSourceResult<CalendarDateTime>;

    /// Fetched day of week carried forward to the current date.
    fn current_day_of_week(&self) -> TimeSourceResult<DayOfWeek>;

    /// True once any fetch has succeeded. Never reverts.
    fn is_ready(&self) -> bool;

    /// Latest snapshot, if any.
    fn snapshot(&self) -> Option<Arc<FetchedTime>>;

    /// Cancel pending and future fetches.
    fn shutdown(&self);
}
