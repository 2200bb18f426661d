//! # Fetch and Retry over HTTP
//!
//! Drives `TimeSourceService` with the real `HttpTimeApiAdapter` against a
//! scripted local endpoint:
//!
//! 1. Non-2xx replies are retried until a good body arrives
//! 2. Malformed bodies are retried the same way
//! 3. An attempt cap ends the loop with `RetriesExhausted`
//! 4. `shutdown()` cancels a loop that would otherwise never end
//! 5. Readiness survives a later failed fetch

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use shared_types::{parse_moment, DayOfWeek};
    use st_01_time_source::{
        HttpTimeApiAdapter, RetryPolicy, SystemMonotonicClock, TimeSourceApi, TimeSourceConfig,
        TimeSourceError, TimeSourceService,
    };
    use tokio::time::timeout;

    use crate::fake_api::{FakeTimeApi, Reply};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const FETCHED: &str = "2020-08-14T15:54:04.417309-07:00";

    fn source(url: &str, max_attempts: Option<u32>) -> Arc<TimeSourceService<HttpTimeApiAdapter>> {
        let config = TimeSourceConfig {
            api_url: url.to_string(),
            retry: RetryPolicy::fixed(Duration::from_millis(10)),
            max_attempts,
            request_timeout: Duration::from_secs(2),
            connect_timeout: Duration::from_secs(1),
        };
        let gateway =
            HttpTimeApiAdapter::new(config.request_timeout, config.connect_timeout).unwrap();
        Arc::new(
            TimeSourceService::new(config, Arc::new(gateway), Arc::new(SystemMonotonicClock))
                .unwrap(),
        )
    }

    // =============================================================================
    // RETRY
    // =============================================================================

    #[tokio::test]
    async fn test_unavailable_endpoint_is_retried_until_success() {
        let api = FakeTimeApi::spawn(vec![
            Reply::Status(503),
            Reply::Status(503),
            Reply::time(FETCHED, 5),
        ])
        .await
        .unwrap();
        let source = source(&api.url(), None);

        let fetched = timeout(Duration::from_secs(5), source.fetch())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(api.hits(), 3);
        assert!(source.is_ready());
        assert_eq!(fetched.timestamp(), parse_moment("2020-08-14 15:54:04").unwrap());
        assert_eq!(fetched.day_of_week(), DayOfWeek::Friday);

        let now = source.current_time().unwrap();
        assert!(now >= fetched.timestamp());
        assert!(now - fetched.timestamp() < chrono::TimeDelta::seconds(5));
    }

    #[tokio::test]
    async fn test_malformed_body_is_retried() {
        let api = FakeTimeApi::spawn(vec![
            Reply::Garbage("<html>upstream timeout</html>".to_string()),
            Reply::time("2020-08-14T15:54:04", 9),
            Reply::time(FETCHED, 5),
        ])
        .await
        .unwrap();
        let source = source(&api.url(), None);

        timeout(Duration::from_secs(5), source.fetch())
            .await
            .unwrap()
            .unwrap();

        // Garbage body, then an out-of-range day of week, then success.
        assert_eq!(api.hits(), 3);
        assert_eq!(source.current_day_of_week().unwrap(), DayOfWeek::Friday);
    }

    #[tokio::test]
    async fn test_attempt_cap_gives_up() {
        let api = FakeTimeApi::spawn(vec![Reply::Status(500)]).await.unwrap();
        let source = source(&api.url(), Some(3));

        let err = timeout(Duration::from_secs(5), source.fetch())
            .await
            .unwrap()
            .unwrap_err();

        assert!(matches!(err, TimeSourceError::RetriesExhausted { attempts: 3, .. }));
        assert_eq!(api.hits(), 3);
        assert!(!source.is_ready());
        assert_eq!(source.current_time().unwrap_err(), TimeSourceError::NotReady);
    }

    // =============================================================================
    // CANCELLATION
    // =============================================================================

    #[tokio::test]
    async fn test_shutdown_cancels_endless_retry() {
        let api = FakeTimeApi::spawn(vec![Reply::Status(502)]).await.unwrap();
        let source = source(&api.url(), None);

        let pending = {
            let source = Arc::clone(&source);
            tokio::spawn(async move { source.fetch().await })
        };

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(api.hits() >= 2);
        source.shutdown();

        let result = timeout(Duration::from_secs(2), pending)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(result.unwrap_err(), TimeSourceError::Cancelled);
        assert!(!source.is_ready());
    }

    // =============================================================================
    // READINESS
    // =============================================================================

    #[tokio::test]
    async fn test_ready_source_stays_ready_after_failed_refetch() {
        let good = FakeTimeApi::spawn(vec![Reply::time(FETCHED, 5)]).await.unwrap();
        let bad = FakeTimeApi::spawn(vec![Reply::Status(500)]).await.unwrap();
        let source = source(&good.url(), Some(2));

        source.fetch().await.unwrap();
        let before = source.snapshot().unwrap();

        let err = source.fetch_from(&bad.url()).await.unwrap_err();
        assert!(matches!(err, TimeSourceError::RetriesExhausted { .. }));
        assert_eq!(bad.hits(), 2);

        assert!(source.is_ready());
        assert!(Arc::ptr_eq(&before, &source.snapshot().unwrap()));
        assert_eq!(source.api_url(), bad.url());
    }

    #[tokio::test]
    async fn test_fetch_from_replaces_snapshot() {
        let first = FakeTimeApi::spawn(vec![Reply::time(FETCHED, 5)]).await.unwrap();
        let second = FakeTimeApi::spawn(vec![Reply::time("2021-01-03T08:00:00Z", 0)])
            .await
            .unwrap();
        let source = source(&first.url(), None);

        source.fetch().await.unwrap();
        let fetched = source.fetch_from(&second.url()).await.unwrap();

        assert_eq!(fetched.timestamp(), parse_moment("2021-01-03 08:00:00").unwrap());
        assert_eq!(source.current_day_of_week().unwrap(), DayOfWeek::Sunday);
        assert_eq!(first.hits(), 1);
        assert_eq!(second.hits(), 1);
    }
}
