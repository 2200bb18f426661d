//! Command line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use shared_types::{DayOfWeek, TimeOfDay};
use st_01_time_source::{RetryPolicy, TimeSourceConfig, DEFAULT_API_URL};
use st_02_reset_scheduler::{
    DailyResetConfig, ResetKind, SchedulerConfig, WeeklyOffsetPolicy, WeeklyResetConfig,
};

/// ST-Admin: server time and reward reset control
#[derive(Parser, Debug)]
#[command(name = "st-admin")]
#[command(about = "Fetch authoritative server time and track daily/weekly reward resets")]
pub struct Args {
    /// Time API endpoint returning `datetime` and `day_of_week`
    #[arg(short, long, default_value = DEFAULT_API_URL)]
    pub url: String,

    /// Refresh interval in seconds for `watch`
    #[arg(short, long, default_value = "1")]
    pub refresh: u64,

    /// JSON file holding the persisted reset deadlines
    #[arg(short, long, default_value = "server-time.json")]
    pub store: PathBuf,

    /// Daily reset time (HH:MM[:SS])
    #[arg(long, default_value = "00:00:00")]
    pub daily: TimeOfDay,

    /// Weekly reset day (name, abbreviation or 0-6 with Sunday = 0)
    #[arg(long, default_value = "sunday")]
    pub weekly_day: DayOfWeek,

    /// Weekly reset time (HH:MM[:SS])
    #[arg(long, default_value = "00:00:00")]
    pub weekly_time: TimeOfDay,

    /// Weekly reset on the reset day itself: `literal` waits a full week, `modular` allows today
    #[arg(long, value_enum, default_value_t = PolicyArg::Literal)]
    pub weekly_policy: PolicyArg,

    /// Give up fetching after this many attempts (retries forever when unset)
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Seconds between fetch retries
    #[arg(long, default_value = "1")]
    pub retry_delay: u64,

    /// Log the current server time every second at debug level
    #[arg(long)]
    pub debug_ticker: bool,

    /// Run in demo mode with the local clock (no API connection required)
    #[arg(long)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print both countdowns on every refresh until interrupted (default)
    Watch,
    /// Print both reset deadlines and their state once
    Status,
    /// Print the current server time and day of week
    Now,
    /// Claim a reward whose reset has passed
    Claim {
        #[arg(value_enum)]
        kind: KindArg,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Daily,
    Weekly,
}

impl From<KindArg> for ResetKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Daily => ResetKind::Daily,
            KindArg::Weekly => ResetKind::Weekly,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    Literal,
    Modular,
}

impl From<PolicyArg> for WeeklyOffsetPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Literal => WeeklyOffsetPolicy::Literal,
            PolicyArg::Modular => WeeklyOffsetPolicy::Modular,
        }
    }
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Watch)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh.max(1))
    }

    pub fn time_source_config(&self) -> TimeSourceConfig {
        TimeSourceConfig {
            api_url: self.url.clone(),
            retry: RetryPolicy::fixed(Duration::from_secs(self.retry_delay)),
            max_attempts: self.max_attempts,
            ..TimeSourceConfig::default()
        }
    }

    pub fn scheduler_config(&self) -> SchedulerConfig {
        SchedulerConfig {
            daily: DailyResetConfig::new(self.daily),
            weekly: WeeklyResetConfig::new(self.weekly_day, self.weekly_time),
            weekly_policy: self.weekly_policy.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["st-admin"]).unwrap();
        assert_eq!(args.command(), Command::Watch);
        assert_eq!(args.url, DEFAULT_API_URL);
        assert_eq!(args.refresh_interval(), Duration::from_secs(1));

        let config = args.scheduler_config();
        assert_eq!(config, SchedulerConfig::default());

        let source = args.time_source_config();
        assert_eq!(source.retry, RetryPolicy::fixed(Duration::from_secs(1)));
        assert_eq!(source.max_attempts, None);
    }

    #[test]
    fn test_schedule_flags() {
        let args = Args::try_parse_from([
            "st-admin",
            "--daily",
            "05:30",
            "--weekly-day",
            "wed",
            "--weekly-time",
            "12:00:30",
            "--weekly-policy",
            "modular",
            "status",
        ])
        .unwrap();

        assert_eq!(args.command(), Command::Status);
        let config = args.scheduler_config();
        assert_eq!(config.daily.time, TimeOfDay::new(5, 30, 0).unwrap());
        assert_eq!(config.weekly.day, DayOfWeek::Wednesday);
        assert_eq!(config.weekly.time, TimeOfDay::new(12, 0, 30).unwrap());
        assert_eq!(config.weekly_policy, WeeklyOffsetPolicy::Modular);
    }

    #[test]
    fn test_claim_subcommand() {
        let args = Args::try_parse_from(["st-admin", "claim", "weekly"]).unwrap();
        assert_eq!(
            args.command(),
            Command::Claim {
                kind: KindArg::Weekly
            }
        );
        assert_eq!(ResetKind::from(KindArg::Weekly), ResetKind::Weekly);
    }

    #[test]
    fn test_invalid_time_rejected() {
        assert!(Args::try_parse_from(["st-admin", "--daily", "25:00"]).is_err());
        assert!(Args::try_parse_from(["st-admin", "--weekly-day", "someday"]).is_err());
    }

    #[test]
    fn test_retry_flags() {
        let args =
            Args::try_parse_from(["st-admin", "--max-attempts", "3", "--retry-delay", "0"]).unwrap();
        let source = args.time_source_config();
        assert_eq!(source.max_attempts, Some(3));
        assert_eq!(source.retry, RetryPolicy::fixed(Duration::ZERO));
    }
}
