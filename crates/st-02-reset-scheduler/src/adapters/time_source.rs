//! Time Source Adapter
//!
//! Implements `CurrentTimeProvider` on top of the Time Source subsystem (1).

use std::sync::Arc;

use chrono::NaiveDate;
use shared_types::{CalendarDateTime, DayOfWeek};
use st_01_time_source::{TimeSourceApi, TimeSourceError};

use crate::error::{ScheduleError, ScheduleResult};
use crate::ports::outbound::CurrentTimeProvider;

/// Reads current time and day of week from a shared time source.
pub struct TimeSourceAdapter<T: TimeSourceApi + ?Sized> {
    source: Arc<T>,
}

impl<T: TimeSourceApi + ?Sized> TimeSourceAdapter<T> {
    pub fn new(source: Arc<T>) -> Self {
        Self { source }
    }
}

fn unavailable(err: TimeSourceError) -> ScheduleError {
    ScheduleError::TimeUnavailable {
        reason: err.to_string(),
    }
}

impl<T: TimeSourceApi + ?Sized> CurrentTimeProvider for TimeSourceAdapter<T> {
    fn current_time(&self) -> ScheduleResult<CalendarDateTime> {
        self.source.current_time().map_err(unavailable)
    }

    fn current_day_of_week(&self) -> ScheduleResult<DayOfWeek> {
        self.source.current_day_of_week().map_err(unavailable)
    }

    fn day_of_week_on(&self, date: NaiveDate) -> ScheduleResult<DayOfWeek> {
        let snapshot = self
            .source
            .snapshot()
            .ok_or_else(|| unavailable(TimeSourceError::NotReady))?;
        Ok(snapshot.day_of_week_on(date))
    }

    fn is_ready(&self) -> bool {
        self.source.is_ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use st_01_time_source::{
        ManualClock, MockTimeApiGateway, TimeApiResponse, TimeSourceConfig, TimeSourceService,
    };

    #[tokio::test]
    async fn test_adapter_follows_source_readiness() {
        let source = Arc::new(
            TimeSourceService::new(
                TimeSourceConfig::default(),
                Arc::new(MockTimeApiGateway::always(TimeApiResponse::new(
                    "2020-08-14T15:54:04+01:00",
                    5,
                ))),
                Arc::new(ManualClock::new()),
            )
            .unwrap(),
        );
        let adapter = TimeSourceAdapter::new(Arc::clone(&source));

        assert!(!adapter.is_ready());
        assert!(matches!(
            adapter.current_time(),
            Err(ScheduleError::TimeUnavailable { .. })
        ));

        source.fetch().await.unwrap();
        assert!(adapter.is_ready());
        assert_eq!(adapter.current_time().unwrap().to_string(), "2020-08-14 15:54:04");
        assert_eq!(adapter.current_day_of_week().unwrap(), DayOfWeek::Friday);

        let sunday = NaiveDate::from_ymd_opt(2020, 8, 16).unwrap();
        assert_eq!(adapter.day_of_week_on(sunday).unwrap(), DayOfWeek::Sunday);
    }
}
