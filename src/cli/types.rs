//! Type-safe wrappers for basketball stats data.

use crate::error::{CarotError, Result};
use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
mod tests;

/// Type-safe wrapper for Player IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = CarotError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for Team IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u64);

impl TeamId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for Game IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl GameId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = CarotError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// A calendar day, independent of time of day and time zone.
///
/// Picks, game lists and eligibility windows are all keyed by day, so the
/// wrapped [`NaiveDate`] never carries a clock time that could shift the
/// day across a time-zone boundary.
///
/// # Examples
///
/// ```rust
/// use carot::GameDay;
///
/// let day: GameDay = "2024-01-17".parse().unwrap();
/// assert_eq!(day.days_after(30).to_string(), "2024-02-16");
/// assert_eq!(day.days_before(17).to_string(), "2023-12-31");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameDay(pub NaiveDate);

impl GameDay {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today in the local time zone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Clamps at the earliest representable date.
    pub fn days_before(&self, n: i64) -> Self {
        self.days_after(n.saturating_neg())
    }

    /// Clamps at the latest representable date.
    pub fn days_after(&self, n: i64) -> Self {
        let moved = Duration::try_days(n).and_then(|d| self.0.checked_add_signed(d));
        match moved {
            Some(date) => Self(date),
            None if n < 0 => Self(NaiveDate::MIN),
            None => Self(NaiveDate::MAX),
        }
    }

    /// Whole days from `earlier` to `self`; negative when `earlier` is later.
    pub fn days_since(&self, earlier: GameDay) -> i64 {
        (self.0 - earlier.0).num_days()
    }

    /// Human-readable form used in listings, e.g. `Jan 17, 2024`.
    pub fn display_long(&self) -> String {
        self.0.format("%b %-d, %Y").to_string()
    }
}

impl Default for GameDay {
    fn default() -> Self {
        Self::today()
    }
}

impl fmt::Display for GameDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for GameDay {
    type Err = CarotError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), Self::FORMAT)
            .map(Self)
            .map_err(|_| CarotError::InvalidDate {
                value: s.to_string(),
            })
    }
}
