//! Time Source Service - fetch loop and current-time accessor

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{CalendarDateTime, DayOfWeek};
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use crate::adapters::HttpTimeApiAdapter;
use crate::domain::{FetchedTime, MonotonicClock, RetryPolicy, SystemMonotonicClock};
use crate::error::{TimeSourceError, TimeSourceResult};
use crate::metrics;
use crate::ports::inbound::TimeSourceApi;
use crate::ports::outbound::TimeApiGateway;

/// Endpoint used when none is configured (Pacific time).
pub const DEFAULT_API_URL: &str = "http://worldtimeapi.org/api/timezone/America/Tijuana";

/// Time source configuration
#[derive(Clone, Debug)]
pub struct TimeSourceConfig {
    /// Time API endpoint
    pub api_url: String,
    /// Delay policy between failed attempts
    pub retry: RetryPolicy,
    /// Give up after this many attempts (`None` = never)
    pub max_attempts: Option<u32>,
    /// Whole-request timeout for the HTTP adapter
    pub request_timeout: Duration,
    /// Connect timeout for the HTTP adapter
    pub connect_timeout: Duration,
}

impl Default for TimeSourceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            retry: RetryPolicy::default(),
            max_attempts: None,
            request_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl TimeSourceConfig {
    pub fn validate(&self) -> TimeSourceResult<()> {
        if self.api_url.trim().is_empty() {
            return Err(TimeSourceError::InvalidConfig {
                reason: "api_url is empty".to_string(),
            });
        }
        if self.max_attempts == Some(0) {
            return Err(TimeSourceError::InvalidConfig {
                reason: "max_attempts must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Time Source implementation
///
/// Owned by the host and shared through `Arc`; there is no global instance.
pub struct TimeSourceService<G, C = SystemMonotonicClock>
where
    G: TimeApiGateway,
    C: MonotonicClock,
{
    config: TimeSourceConfig,
    api_url: RwLock<String>,
    gateway: Arc<G>,
    clock: Arc<C>,
    /// Latest snapshot, swapped whole.
    snapshot: RwLock<Option<Arc<FetchedTime>>>,
    /// Serialises fetches.
    fetch_lock: Mutex<()>,
    shutdown_tx: watch::Sender<bool>,
}

impl TimeSourceService<HttpTimeApiAdapter, SystemMonotonicClock> {
    /// HTTP-backed source on the system monotonic clock.
    pub fn from_config(config: TimeSourceConfig) -> TimeSourceResult<Self> {
        let gateway = HttpTimeApiAdapter::new(config.request_timeout, config.connect_timeout)?;
        Self::new(config, Arc::new(gateway), Arc::new(SystemMonotonicClock))
    }
}

impl<G, C> TimeSourceService<G, C>
where
    G: TimeApiGateway,
    C: MonotonicClock,
{
    /// Create a new time source. No request is issued until `fetch`.
    pub fn new(config: TimeSourceConfig, gateway: Arc<G>, clock: Arc<C>) -> TimeSourceResult<Self> {
        config.validate()?;
        let (shutdown_tx, _) = watch::channel(false);

        Ok(Self {
            api_url: RwLock::new(config.api_url.clone()),
            config,
            gateway,
            clock,
            snapshot: RwLock::new(None),
            fetch_lock: Mutex::new(()),
            shutdown_tx,
        })
    }

    /// Endpoint the next fetch will use.
    pub fn api_url(&self) -> String {
        self.api_url.read().clone()
    }

    pub fn is_shut_down(&self) -> bool {
        *self.shutdown_tx.borrow()
    }

    /// One request, no retry.
    async fn try_fetch_once(&self, url: &str) -> TimeSourceResult<FetchedTime> {
        let response = self.gateway.fetch_time(url).await?;
        let (timestamp, day_of_week) = response.parse()?;
        Ok(FetchedTime::new(timestamp, day_of_week, self.clock.now()))
    }

    async fn fetch_with_retry(&self) -> TimeSourceResult<Arc<FetchedTime>> {
        let _guard = self.fetch_lock.lock().await;
        let mut shutdown = self.shutdown_tx.subscribe();
        if *shutdown.borrow() {
            return Err(TimeSourceError::Cancelled);
        }

        let url = self.api_url();
        let mut failures: u32 = 0;

        loop {
            metrics::record_fetch_attempt();

            let outcome = tokio::select! {
                outcome = self.try_fetch_once(&url) => outcome,
                _ = shutdown.wait_for(|stop| *stop) => return Err(TimeSourceError::Cancelled),
            };

            let error = match outcome {
                Ok(fetched) => {
                    let fetched = Arc::new(fetched);
                    *self.snapshot.write() = Some(Arc::clone(&fetched));
                    metrics::record_fetch_success();
                    info!(
                        timestamp = %fetched.timestamp(),
                        day_of_week = %fetched.day_of_week(),
                        attempts = failures + 1,
                        "[st-01] Server time loaded"
                    );
                    return Ok(fetched);
                }
                Err(e) => e,
            };

            failures += 1;
            metrics::record_fetch_failure(error.kind());

            if !error.is_retryable() {
                return Err(error);
            }
            if let Some(max) = self.config.max_attempts {
                if failures >= max {
                    warn!("[st-01] Giving up on {} after {} attempts: {}", url, failures, error);
                    return Err(TimeSourceError::RetriesExhausted {
                        attempts: failures,
                        last_error: error.to_string(),
                    });
                }
            }

            let delay = self.config.retry.delay_for(failures);
            warn!(
                attempt = failures,
                retry_in_ms = delay.as_millis() as u64,
                "[st-01] Time fetch failed: {}",
                error
            );

            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = shutdown.wait_for(|stop| *stop) => return Err(TimeSourceError::Cancelled),
            }
        }
    }

    /// Log the current time every `period` until shutdown.
    ///
    /// Ticks before the first fetch completes are skipped silently.
    pub async fn run_debug_ticker(&self, period: Duration) {
        let mut shutdown = self.shutdown_tx.subscribe();
        let mut ticker = tokio::time::interval(period);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Ok(now) = self.current_time() {
                        debug!(current_time = %now, "[st-01] Current time");
                    }
                }
                _ = shutdown.wait_for(|stop| *stop) => {
                    debug!("[st-01] Debug ticker stopped");
                    return;
                }
            }
        }
    }
}

#[async_trait]
impl<G, C> TimeSourceApi for TimeSourceService<G, C>
where
    G: TimeApiGateway,
    C: MonotonicClock,
{
    async fn fetch(&self) -> TimeSourceResult<Arc<FetchedTime>> {
        self.fetch_with_retry().await
    }

    async fn fetch_from(&self, url: &str) -> TimeSourceResult<Arc<FetchedTime>> {
        *self.api_url.write() = url.to_string();
        self.fetch_with_retry().await
    }

    fn current_time(&self) -> TimeSourceResult<CalendarDateTime> {
        let snapshot = self.snapshot().ok_or(TimeSourceError::NotReady)?;
        snapshot.current_time_at(self.clock.now())
    }

    fn current_day_of_week(&self) -> TimeSourceResult<DayOfWeek> {
        let snapshot = self.snapshot().ok_or(TimeSourceError::NotReady)?;
        let now = snapshot.current_time_at(self.clock.now())?;
        Ok(snapshot.day_of_week_on(now.date()))
    }

    fn is_ready(&self) -> bool {
        self.snapshot.read().is_some()
    }

    fn snapshot(&self) -> Option<Arc<FetchedTime>> {
        self.snapshot.read().clone()
    }

    fn shutdown(&self) {
        if !self.shutdown_tx.send_replace(true) {
            info!("[st-01] Shutdown signal received");
        }
    }
}
