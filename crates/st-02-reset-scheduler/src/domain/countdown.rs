//! Countdown text for the claim UI

use chrono::TimeDelta;

/// `hh:mm:ss`, or `dd:hh:mm:ss` when `with_days` is set.
///
/// Without days, hours are total hours so a 30h wait reads `30:00:00`.
/// Negative inputs render as zero.
pub fn format_countdown(remaining: TimeDelta, with_days: bool) -> String {
    let total = remaining.num_seconds().max(0);
    let seconds = total % 60;
    let minutes = (total / 60) % 60;
    let total_hours = total / 3600;

    if with_days {
        format!(
            "{:02}:{:02}:{:02}:{:02}",
            total_hours / 24,
            total_hours % 24,
            minutes,
            seconds
        )
    } else {
        format!("{:02}:{:02}:{:02}", total_hours, minutes, seconds)
    }
}
