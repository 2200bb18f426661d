//! Host application: owns the time source and the scheduler.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::Datelike;
use st_01_time_source::{
    HttpTimeApiAdapter, MockTimeApiGateway, SystemMonotonicClock, TimeApiGateway,
    TimeApiResponse, TimeSourceApi, TimeSourceError, TimeSourceService,
};
use st_02_reset_scheduler::{
    JsonFileKeyValueStore, ResetKind, ResetOverview, ResetSchedulerApi, ResetSchedulerService,
    TimeSourceAdapter,
};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::cli::{Args, Command};
use crate::render;

pub type Scheduler<G> =
    ResetSchedulerService<TimeSourceAdapter<TimeSourceService<G>>, JsonFileKeyValueStore>;

/// True when `err` comes from a fetch abandoned on shutdown.
pub fn is_cancelled(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<TimeSourceError>(),
        Some(TimeSourceError::Cancelled)
    )
}

/// Time source plus scheduler, wired together.
pub struct App<G: TimeApiGateway> {
    source: Arc<TimeSourceService<G>>,
    scheduler: Scheduler<G>,
}

impl App<HttpTimeApiAdapter> {
    /// Talk to the configured time API over HTTP.
    pub fn connect(args: &Args) -> anyhow::Result<Self> {
        let config = args.time_source_config();
        let gateway = HttpTimeApiAdapter::new(config.request_timeout, config.connect_timeout)?;
        Self::with_gateway(args, Arc::new(gateway))
    }
}

impl App<MockTimeApiGateway> {
    /// Serve the local clock instead of a remote API.
    pub fn demo(args: &Args) -> anyhow::Result<Self> {
        let now = chrono::Local::now();
        let response = TimeApiResponse::new(
            now.format("%Y-%m-%dT%H:%M:%S%.6f%:z").to_string(),
            i64::from(now.weekday().num_days_from_sunday()),
        );
        Self::with_gateway(args, Arc::new(MockTimeApiGateway::always(response)))
    }
}

impl<G: TimeApiGateway> App<G> {
    pub fn with_gateway(args: &Args, gateway: Arc<G>) -> anyhow::Result<Self> {
        let source = Arc::new(TimeSourceService::new(
            args.time_source_config(),
            gateway,
            Arc::new(SystemMonotonicClock),
        )?);

        let store = JsonFileKeyValueStore::open(&args.store)
            .with_context(|| format!("opening store {}", args.store.display()))?;

        let scheduler = ResetSchedulerService::new(
            args.scheduler_config(),
            Arc::new(TimeSourceAdapter::new(Arc::clone(&source))),
            Arc::new(store),
        );

        Ok(Self { source, scheduler })
    }

    pub fn source(&self) -> Arc<TimeSourceService<G>> {
        Arc::clone(&self.source)
    }

    pub fn scheduler(&self) -> &Scheduler<G> {
        &self.scheduler
    }

    /// Initial fetch; retries per policy until success or shutdown.
    pub async fn fetch(&self) -> anyhow::Result<()> {
        let snapshot = self
            .source
            .fetch()
            .await
            .with_context(|| format!("fetching time from {}", self.source.api_url()))?;
        info!(
            timestamp = %snapshot.timestamp(),
            day_of_week = %snapshot.day_of_week(),
            "[st-admin] Server time ready"
        );
        Ok(())
    }

    pub fn shutdown(&self) {
        self.source.shutdown();
    }

    /// Run a one-shot command and return its output.
    pub fn execute(&self, command: Command) -> anyhow::Result<String> {
        match command {
            Command::Now => {
                let current = self.source.current_time()?;
                let day = self.source.current_day_of_week()?;
                Ok(render::now_line(current, day))
            }
            Command::Status | Command::Watch => {
                let overview = self.scheduler.refresh()?;
                Ok(render::overview_block(&overview))
            }
            Command::Claim { kind } => {
                let kind = ResetKind::from(kind);
                let next = self.scheduler.claim(kind)?;
                Ok(format!(
                    "{} reward claimed; next reset {}",
                    kind,
                    shared_types::format_moment(&next)
                ))
            }
        }
    }

    /// One refresh tick.
    pub fn tick(&self) -> anyhow::Result<ResetOverview> {
        Ok(self.scheduler.refresh()?)
    }

    /// Print a status line every `interval` until `stop` flips to true.
    pub async fn watch(&self, interval: Duration, mut stop: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match self.tick() {
                        Ok(overview) => println!("{}", render::watch_line(&overview)),
                        Err(e) => warn!("[st-admin] Refresh failed: {:#}", e),
                    }
                }
                _ = stop.wait_for(|stop| *stop) => {
                    info!("[st-admin] Watch stopped");
                    return;
                }
            }
        }
    }
}
