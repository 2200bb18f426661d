//! Plain-text rendering of scheduler state.

use shared_types::{format_moment, CalendarDateTime, DayOfWeek};
use st_02_reset_scheduler::{ResetKind, ResetOverview, ResetStatus};

/// `Friday 2020-08-14 15:54:04`
pub fn now_line(current: CalendarDateTime, day: DayOfWeek) -> String {
    format!("{} {}", day, format_moment(&current))
}

/// One status row: kind, deadline and countdown or claim message.
pub fn status_row(status: &ResetStatus) -> String {
    format!(
        "{:<6} reset {}  {}",
        status.kind.to_string(),
        format_moment(&status.deadline),
        status.display_text()
    )
}

/// Multi-line block printed by `status`.
pub fn overview_block(overview: &ResetOverview) -> String {
    let mut lines = vec![format!("Server time  {}", format_moment(&overview.current_time))];
    lines.extend(ResetKind::ALL.iter().map(|kind| status_row(overview.get(*kind))));
    lines.join("\n")
}

/// Single line printed on each `watch` tick.
pub fn watch_line(overview: &ResetOverview) -> String {
    format!(
        "{} | Daily {} | Weekly {}",
        format_moment(&overview.current_time),
        overview.daily.display_text(),
        overview.weekly.display_text()
    )
}
