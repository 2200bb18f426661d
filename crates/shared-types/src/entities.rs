//! # Core Calendar Entities
//!
//! ## Clusters
//!
//! - **Moments**: `CalendarDateTime`
//! - **Week**: `DayOfWeek`
//! - **Clock**: `TimeOfDay`

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::{CalendarError, CalendarResult};

/// A calendar date and time without any zone information.
pub type CalendarDateTime = NaiveDateTime;

// =============================================================================
// DAY OF WEEK
// =============================================================================

/// Day of the week, numbered the way the time API reports `day_of_week`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl DayOfWeek {
    /// All days, Sunday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// Build from a `0 = Sunday … 6 = Saturday` index.
    pub fn from_index(index: i64) -> CalendarResult<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(CalendarError::InvalidDayOfWeek(index))
    }

    /// Index in `0..=6`, Sunday being 0.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// The day `days` after this one (negative goes backwards).
    pub fn advance(self, days: i64) -> Self {
        let idx = (i64::from(self.index()) + days).rem_euclid(7);
        Self::ALL[idx as usize]
    }

    /// English name of the day.
    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayOfWeek {
    type Err = CalendarError;

    /// Accepts full names, three-letter abbreviations, or an index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<i64>() {
            return Self::from_index(index);
        }
        let lower = trimmed.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| {
                let name = day.name().to_ascii_lowercase();
                name == lower || name[..3] == lower
            })
            .ok_or_else(|| CalendarError::UnknownDayName(trimmed.to_string()))
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        Self::ALL[weekday.num_days_from_sunday() as usize]
    }
}

impl From<DayOfWeek> for Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Sunday => Weekday::Sun,
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
        }
    }
}

// =============================================================================
// TIME OF DAY
// =============================================================================

/// A validated wall-clock time with whole-second precision.
///
/// Deserialization goes through [`TimeOfDay::new`], so out-of-range fields
/// are rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(try_from = "TimeOfDayFields")]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
    second: u32,
}

/// Unchecked wire form of [`TimeOfDay`].
#[derive(Deserialize)]
struct TimeOfDayFields {
    hour: u32,
    minute: u32,
    second: u32,
}

impl TryFrom<TimeOfDayFields> for TimeOfDay {
    type Error = CalendarError;

    fn try_from(fields: TimeOfDayFields) -> Result<Self, Self::Error> {
        Self::new(fields.hour, fields.minute, fields.second)
    }
}

impl TimeOfDay {
    /// Midnight, `00:00:00`.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Create a time of day, rejecting values outside the clock ranges.
    pub fn new(hour: u32, minute: u32, second: u32) -> CalendarResult<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(CalendarError::InvalidTimeOfDay {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// Convert to a chrono time.
    pub fn to_naive_time(self) -> NaiveTime {
        // Ranges are checked in `new`, so this is always `Some`.
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second).unwrap_or(NaiveTime::MIN)
    }

    /// This time of day on `date`.
    pub fn on(self, date: NaiveDate) -> CalendarDateTime {
        date.and_time(self.to_naive_time())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for TimeOfDay {
    type Err = CalendarError;

    /// Parses `HH:MM:SS` or `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidMoment {
            input: s.to_string(),
            reason: "expected HH:MM[:SS]".to_string(),
        };

        let parts: Vec<&str> = s.trim().split(':').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(invalid());
        }
        let mut fields = [0u32; 3];
        for (slot, part) in fields.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| invalid())?;
        }
        Self::new(fields[0], fields[1], fields[2])
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        use chrono::Timelike;
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
        }
    }
}
