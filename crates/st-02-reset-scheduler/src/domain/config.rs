//! Reset schedule configuration

use serde::{Deserialize, Serialize};
use shared_types::{DayOfWeek, TimeOfDay};

/// Time of day of the daily reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyResetConfig {
    pub time: TimeOfDay,
}

impl DailyResetConfig {
    pub fn new(time: TimeOfDay) -> Self {
        Self { time }
    }
}

/// Day and time of day of the weekly reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyResetConfig {
    pub day: DayOfWeek,
    pub time: TimeOfDay,
}

impl WeeklyResetConfig {
    pub fn new(day: DayOfWeek, time: TimeOfDay) -> Self {
        Self { day, time }
    }
}

impl Default for WeeklyResetConfig {
    fn default() -> Self {
        Self {
            day: DayOfWeek::Sunday,
            time: TimeOfDay::MIDNIGHT,
        }
    }
}

/// How the day offset to the weekly reset is derived.
///
/// Both start from `(7 - today) + target`.
///
/// | today == target | Literal | Modular |
/// |-----------------|---------|---------|
/// | offset          | 7       | 0       |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeeklyOffsetPolicy {
    /// Subtract 7 only when the sum exceeds 7. Offsets fall in 1..=7.
    #[default]
    Literal,
    /// Sum modulo 7. Offsets fall in 0..=6; the reset may be today.
    Modular,
}

/// Complete scheduler configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    pub daily: DailyResetConfig,
    pub weekly: WeeklyResetConfig,
    #[serde(default)]
    pub weekly_policy: WeeklyOffsetPolicy,
}
