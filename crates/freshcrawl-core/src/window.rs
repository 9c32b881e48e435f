//! Recency window anchored to a fixed reference instant.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Largest window accepted from users, roughly one hundred years.
pub const MAX_DAYS: u32 = 36_500;

/// A span of whole days ending at a fixed `now`.
///
/// `now` is captured once when the window is built and every comparison in a
/// crawl goes through the same window, so a long crawl stays consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecencyWindow {
    now: DateTime<Utc>,
    days: u32,
}

impl RecencyWindow {
    /// Create a window of `days` ending at `now`.
    pub fn new(now: DateTime<Utc>, days: u32) -> Self {
        Self { now, days }
    }

    /// Create a window ending at UTC midnight of the current day.
    pub fn ending_today(days: u32) -> Self {
        Self::new(start_of_day(Utc::now()), days)
    }

    /// The fixed reference instant.
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Length of the window in days.
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Length of the window.
    pub fn span(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.days))
    }

    /// First instant of the window (`now - span`), clamped to the earliest
    /// representable instant.
    pub fn start(&self) -> DateTime<Utc> {
        self.now
            .checked_sub_signed(self.span())
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Calendar date of the window start.
    pub fn start_date(&self) -> NaiveDate {
        self.start().date_naive()
    }

    /// Calendar date of `now`.
    pub fn end_date(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Age of a timestamp relative to `now`. Negative for future timestamps.
    pub fn age_of(&self, timestamp: DateTime<Utc>) -> TimeDelta {
        self.now - timestamp
    }

    /// Strict test: an item exactly `span` old is outside the window.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.age_of(timestamp) < self.span()
    }
}

fn start_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}
