//! Human-readable duration rendering for epoch time estimates.

use crate::constants::DAYS_PER_YEAR;

/// Render a duration in days as a short human-readable string.
///
/// Sub-day durations render in hours, sub-year in days, the rest in years.
/// Non-finite input (a zero-ratio epoch is unreachable in finite time)
/// renders as `"never"`; negative input clamps to zero.
pub fn format_days(days: f64) -> String {
    if !days.is_finite() {
        return "never".to_string();
    }
    let days = days.max(0.0);
    if days < 1.0 {
        format!("{:.1} hours", days * 24.0)
    } else if days < DAYS_PER_YEAR {
        format!("{days:.1} days")
    } else {
        format!("{:.1} years", days / DAYS_PER_YEAR)
    }
}
