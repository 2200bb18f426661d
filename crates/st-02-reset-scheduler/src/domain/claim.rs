//! Claim state machine
//!
//! ```text
//! [LOCKED] ──remaining <= 0──→ [CLAIMABLE]
//!     ↑                            │
//!     └──── claim(): new deadline ─┘
//! ```
//!
//! There is no automatic way back to LOCKED; only an explicit claim
//! recomputes and stores the next deadline.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use shared_types::CalendarDateTime;

use super::countdown::format_countdown;

/// Which reward schedule a deadline belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetKind {
    Daily,
    Weekly,
}

impl ResetKind {
    pub const ALL: [ResetKind; 2] = [ResetKind::Daily, ResetKind::Weekly];

    /// Key the deadline is persisted under.
    pub fn storage_key(self) -> &'static str {
        match self {
            ResetKind::Daily => "daily_reset_deadline",
            ResetKind::Weekly => "weekly_reset_deadline",
        }
    }

    /// Lowercase name for log fields and metric labels.
    pub fn label(self) -> &'static str {
        match self {
            ResetKind::Daily => "daily",
            ResetKind::Weekly => "weekly",
        }
    }

    /// Text shown instead of a countdown once claimable.
    pub fn claim_message(self) -> &'static str {
        match self {
            ResetKind::Daily => "Claim Daily Reward!",
            ResetKind::Weekly => "Claim Weekly Reward!",
        }
    }
}

impl fmt::Display for ResetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResetKind::Daily => f.write_str("Daily"),
            ResetKind::Weekly => f.write_str("Weekly"),
        }
    }
}

impl FromStr for ResetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(ResetKind::Daily),
            "weekly" => Ok(ResetKind::Weekly),
            other => Err(format!("unknown reset kind '{other}' (expected daily|weekly)")),
        }
    }
}

/// Claimability of one reset kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimState {
    Locked,
    Claimable,
}

impl ClaimState {
    pub fn from_remaining(remaining: TimeDelta) -> Self {
        if remaining <= TimeDelta::zero() {
            ClaimState::Claimable
        } else {
            ClaimState::Locked
        }
    }
}

/// Per-tick view of one reset kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResetStatus {
    pub kind: ResetKind,
    pub deadline: CalendarDateTime,
    pub remaining: TimeDelta,
    pub state: ClaimState,
}

impl ResetStatus {
    pub fn new(kind: ResetKind, deadline: CalendarDateTime, current: CalendarDateTime) -> Self {
        let remaining = super::schedule::time_remaining(deadline, current);
        Self {
            kind,
            deadline,
            remaining,
            state: ClaimState::from_remaining(remaining),
        }
    }

    pub fn is_claimable(&self) -> bool {
        self.state == ClaimState::Claimable
    }

    /// Countdown text, or the claim message once claimable.
    pub fn display_text(&self) -> String {
        match self.state {
            ClaimState::Claimable => self.kind.claim_message().to_string(),
            ClaimState::Locked => format_countdown(self.remaining, self.kind == ResetKind::Weekly),
        }
    }
}
