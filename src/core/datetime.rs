//! Calendar-day helpers.
//!
//! All bucketing happens on `NaiveDate` values in UTC. Display labels are
//! produced here and only used for presentation, never as grouping keys.

use chrono::{DateTime, Days, NaiveDate, TimeDelta, Utc};

/// Longest trailing window, roughly ten years.
pub const MAX_WINDOW_DAYS: u32 = 3660;

/// The `days` calendar days ending on `end` (inclusive), oldest first.
///
/// The window is clamped to `1..=MAX_WINDOW_DAYS`, and stops early at the
/// start of the representable calendar.
#[must_use]
pub fn trailing_days(end: NaiveDate, days: u32) -> Vec<NaiveDate> {
    let days = days.clamp(1, MAX_WINDOW_DAYS);
    let mut window: Vec<NaiveDate> = (0..days)
        .map_while(|offset| end.checked_sub_days(Days::new(u64::from(offset))))
        .collect();
    window.reverse();
    window
}

/// Chart label for a day, e.g. `Nov 29` or `Jan 3`.
#[must_use]
pub fn day_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Parse an evaluation instant.
///
/// Supports:
/// - `now`, `today` (start of the current UTC day), `yesterday`
/// - `3 days ago`, `2 weeks ago`
/// - `2024-01-05` (midnight UTC)
/// - RFC 3339 timestamps
///
/// Returns `None` if the input cannot be parsed.
#[must_use]
pub fn parse_as_of(input: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let raw = input.trim();
    let input = raw.to_lowercase();
    let today = now.date_naive();

    match input.as_str() {
        "now" => return Some(now),
        "today" => return start_of_day(today),
        "yesterday" => return today.pred_opt().and_then(start_of_day),
        _ => {},
    }

    if let Some(date) = parse_relative_ago(&input, today) {
        return start_of_day(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(&input, "%Y-%m-%d") {
        return start_of_day(date);
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse "X days/weeks ago" patterns.
fn parse_relative_ago(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.len() == 3 && parts[2] == "ago" {
        let amount: i64 = parts[0].parse().ok()?;
        let unit = parts[1].trim_end_matches('s');

        let days = match unit {
            "day" => amount,
            "week" => amount.checked_mul(7)?,
            _ => return None,
        };

        return today.checked_sub_signed(TimeDelta::try_days(days)?);
    }

    None
}

fn start_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc())
}
