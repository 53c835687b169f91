//! Calendar constants and game status formatting.

use crate::cli::types::GameDay;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone};
use std::fmt::Display;

/// First day of the season tracked by the pick history scan.
pub fn season_start() -> GameDay {
    GameDay(NaiveDate::from_ymd_opt(2022, 10, 18).unwrap_or(NaiveDate::MIN))
}

/// Days a player stays unpickable after being picked.
pub const ELIGIBILITY_WINDOW_DAYS: i64 = 30;

fn parse_tip_off(status: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(status)
        .or_else(|_| DateTime::parse_from_str(status, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()
}

/// Render a game status in the local time zone.
///
/// Scheduled games carry their tip-off as an ISO timestamp; everything else
/// ("Final", "3rd Qtr", "Halftime") is returned unchanged.
pub fn format_status(status: &str) -> String {
    format_status_in(status, &Local)
}

pub fn format_status_in<Tz>(status: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_tip_off(status) {
        Some(tip_off) => tip_off.with_timezone(tz).format("%I:%M %p").to_string(),
        None => status.to_string(),
    }
}
