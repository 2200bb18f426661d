//! # Reset Flow: Time Source (1) → Reset Scheduler (2)
//!
//! Fake time API → `TimeSourceService` → `TimeSourceAdapter` →
//! `ResetSchedulerService` → `JsonFileKeyValueStore`.
//!
//! 1. First refresh computes and persists both deadlines
//! 2. A restarted host reads the persisted deadlines back
//! 3. A passed deadline is claimable and a claim re-locks it
//! 4. Nothing is computed until the source is ready

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;
    use std::time::Duration;

    use shared_types::{parse_moment, CalendarDateTime, DayOfWeek};
    use st_01_time_source::{
        HttpTimeApiAdapter, RetryPolicy, SystemMonotonicClock, TimeSourceApi, TimeSourceConfig,
        TimeSourceService,
    };
    use st_02_reset_scheduler::{
        ClaimState, JsonFileKeyValueStore, KeyValueStore, ResetKind, ResetSchedulerApi,
        ResetSchedulerService, ScheduleError, SchedulerConfig, TimeSourceAdapter,
    };

    use crate::fake_api::{FakeTimeApi, Reply};

    type Source = TimeSourceService<HttpTimeApiAdapter>;
    type Scheduler = ResetSchedulerService<TimeSourceAdapter<Source>, JsonFileKeyValueStore>;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn at(s: &str) -> CalendarDateTime {
        parse_moment(s).unwrap()
    }

    fn source(url: &str) -> Arc<Source> {
        let config = TimeSourceConfig {
            api_url: url.to_string(),
            retry: RetryPolicy::fixed(Duration::from_millis(10)),
            ..TimeSourceConfig::default()
        };
        let gateway =
            HttpTimeApiAdapter::new(config.request_timeout, config.connect_timeout).unwrap();
        Arc::new(
            TimeSourceService::new(config, Arc::new(gateway), Arc::new(SystemMonotonicClock))
                .unwrap(),
        )
    }

    /// Fresh host: new source, new scheduler, store reopened from disk.
    async fn host(api: &FakeTimeApi, store: &Path, config: SchedulerConfig) -> (Arc<Source>, Scheduler) {
        let source = source(&api.url());
        source.fetch().await.unwrap();
        let scheduler = ResetSchedulerService::new(
            config,
            Arc::new(TimeSourceAdapter::new(Arc::clone(&source))),
            Arc::new(JsonFileKeyValueStore::open(store).unwrap()),
        );
        (source, scheduler)
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[tokio::test]
    async fn test_first_refresh_persists_deadlines() {
        let api = FakeTimeApi::spawn(vec![Reply::time("2020-08-14T15:54:04.123-07:00", 5)])
            .await
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("prefs.json");

        let (_, scheduler) = host(&api, &store, SchedulerConfig::default()).await;
        let overview = scheduler.refresh().unwrap();

        assert_eq!(overview.daily.deadline, at("2020-08-15 00:00:00"));
        assert_eq!(overview.weekly.deadline, at("2020-08-16 00:00:00"));
        assert_eq!(overview.daily.state, ClaimState::Locked);
        assert_eq!(overview.weekly.state, ClaimState::Locked);

        let reopened = JsonFileKeyValueStore::open(&store).unwrap();
        assert_eq!(
            reopened.get("daily_reset_deadline").unwrap().as_deref(),
            Some("2020-08-15 00:00:00")
        );
        assert_eq!(
            reopened.get("weekly_reset_deadline").unwrap().as_deref(),
            Some("2020-08-16 00:00:00")
        );
    }

    #[tokio::test]
    async fn test_restart_keeps_deadlines_and_claims_after_reset() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("prefs.json");

        // Session 1: Friday afternoon, both rewards locked.
        {
            let api = FakeTimeApi::spawn(vec![Reply::time("2020-08-14T15:54:04-07:00", 5)])
                .await
                .unwrap();
            let (_, scheduler) = host(&api, &store, SchedulerConfig::default()).await;
            scheduler.refresh().unwrap();
            assert!(matches!(
                scheduler.claim(ResetKind::Daily),
                Err(ScheduleError::NotClaimable { .. })
            ));
        }

        // Session 2: Saturday morning. Daily deadline passed, weekly still ahead.
        let api = FakeTimeApi::spawn(vec![Reply::time("2020-08-15T09:00:00-07:00", 6)])
            .await
            .unwrap();
        let (_, scheduler) = host(&api, &store, SchedulerConfig::default()).await;

        let overview = scheduler.refresh().unwrap();
        assert_eq!(overview.daily.deadline, at("2020-08-15 00:00:00"));
        assert!(overview.daily.is_claimable());
        assert_eq!(overview.daily.display_text(), "Claim Daily Reward!");
        assert!(!overview.weekly.is_claimable());

        let next = scheduler.claim(ResetKind::Daily).unwrap();
        assert_eq!(next, at("2020-08-16 00:00:00"));
        assert_eq!(scheduler.status(ResetKind::Daily).unwrap().state, ClaimState::Locked);

        let reopened = JsonFileKeyValueStore::open(&store).unwrap();
        assert_eq!(
            reopened.get("daily_reset_deadline").unwrap().as_deref(),
            Some("2020-08-16 00:00:00")
        );
    }

    #[tokio::test]
    async fn test_weekly_claim_on_reset_day() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("prefs.json");
        std::fs::write(
            &store,
            r#"{"weekly_reset_deadline": "2020-08-19 12:00:00"}"#,
        )
        .unwrap();

        // Wednesday 12:30, weekly reset Wednesday 12:00.
        let api = FakeTimeApi::spawn(vec![Reply::time("2020-08-19T12:30:00-07:00", 3)])
            .await
            .unwrap();
        let mut config = SchedulerConfig::default();
        config.weekly.day = DayOfWeek::Wednesday;
        config.weekly.time = "12:00".parse().unwrap();
        let (source, scheduler) = host(&api, &store, config).await;

        assert_eq!(source.current_day_of_week().unwrap(), DayOfWeek::Wednesday);
        assert!(scheduler.status(ResetKind::Weekly).unwrap().is_claimable());

        // Same weekday as the target: next reset is a full week out.
        let next = scheduler.claim(ResetKind::Weekly).unwrap();
        assert_eq!(next, at("2020-08-26 12:00:00"));
    }

    #[tokio::test]
    async fn test_scheduler_waits_for_ready_source() {
        let api = FakeTimeApi::spawn(vec![Reply::time("2020-08-14T15:54:04-07:00", 5)])
            .await
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("prefs.json");

        let source = source(&api.url());
        let scheduler = ResetSchedulerService::new(
            SchedulerConfig::default(),
            Arc::new(TimeSourceAdapter::new(Arc::clone(&source))),
            Arc::new(JsonFileKeyValueStore::open(&store).unwrap()),
        );

        assert!(!scheduler.is_ready());
        assert!(matches!(
            scheduler.refresh(),
            Err(ScheduleError::TimeUnavailable { .. })
        ));
        assert!(!store.exists());

        source.fetch().await.unwrap();
        assert!(scheduler.is_ready());
        assert!(scheduler.refresh().is_ok());
        assert!(store.exists());
    }
}
