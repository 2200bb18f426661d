//! Time API response parsing
//!
//! The endpoint returns datetimes such as `2020-08-14T15:54:04.123+01:00`.
//! Only the leading `YYYY-MM-DD` and the first `HH:MM:SS` are read; the
//! UTC offset suffix is discarded, never converted. The fetched value is
//! treated as already being in the reference timezone.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use shared_types::{CalendarDateTime, DayOfWeek};

use crate::error::{TimeSourceError, TimeSourceResult};

/// Fields read from the time API body. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeApiResponse {
    /// e.g. `2020-08-14T15:54:04+01:00` or `...Z`
    pub datetime: String,
    /// 0 = Sunday ... 6 = Saturday
    pub day_of_week: i64,
}

impl TimeApiResponse {
    pub fn new(datetime: impl Into<String>, day_of_week: i64) -> Self {
        Self {
            datetime: datetime.into(),
            day_of_week,
        }
    }

    /// Extract the naive timestamp and day of week.
    pub fn parse(&self) -> TimeSourceResult<(CalendarDateTime, DayOfWeek)> {
        let timestamp = parse_api_datetime(&self.datetime)?;
        let day = DayOfWeek::from_index(self.day_of_week).map_err(|e| {
            TimeSourceError::MalformedBody {
                reason: e.to_string(),
            }
        })?;
        Ok((timestamp, day))
    }
}

/// Read the date and time portions of an API datetime, ignoring any offset.
pub fn parse_api_datetime(datetime: &str) -> TimeSourceResult<CalendarDateTime> {
    let malformed = |reason: &str| TimeSourceError::MalformedBody {
        reason: format!("{reason} in '{datetime}'"),
    };

    let date = leading_date(datetime).ok_or_else(|| malformed("no YYYY-MM-DD prefix"))?;
    let time = first_time(datetime).ok_or_else(|| malformed("no HH:MM:SS"))?;

    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| malformed(&format!("bad date ({e})")))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .map_err(|e| malformed(&format!("bad time ({e})")))?;

    Ok(date.and_time(time))
}

/// `^\d{4}-\d{2}-\d{2}`
fn leading_date(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    if bytes.len() < 10 {
        return None;
    }
    let ok = bytes[..10].iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    ok.then(|| &s[..10])
}

/// First match of `\d{2}:\d{2}:\d{2}`
fn first_time(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    bytes
        .windows(8)
        .position(|w| {
            w.iter().enumerate().all(|(i, b)| match i {
                2 | 5 => *b == b':',
                _ => b.is_ascii_digit(),
            })
        })
        .map(|start| &s[start..start + 8])
}
