//! Wall clock and tick cadence.
//!
//! The clock only supplies the date part for projections; per-second display
//! granularity is not needed, the cadence just keeps strips correct across
//! midnight rollover in the anchor zone.

use std::time::{Duration, Instant};

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;

use crate::projection::ANCHOR_ZONE;

/// Current real time, refreshed on the ticker cadence
#[derive(Debug, Clone)]
pub struct WallClock {
    now: DateTime<Utc>,
}

impl WallClock {
    pub fn new() -> Self {
        Self { now: Utc::now() }
    }

    /// Re-read the system clock
    pub fn refresh(&mut self) {
        self.now = Utc::now();
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Today's date as seen from the anchor zone
    pub fn anchor_date(&self) -> NaiveDate {
        self.now.with_timezone(&ANCHOR_ZONE).date_naive()
    }

    /// Current hour of day in the given zone
    pub fn hour_in(&self, tz: Tz) -> u32 {
        self.now.with_timezone(&tz).hour()
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Recurring interval check, owned by the app model so it is released
/// with it on teardown
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Instant::now(),
        }
    }

    /// True once each time the interval has elapsed
    pub fn due(&mut self) -> bool {
        if self.last.elapsed() >= self.interval {
            self.last = Instant::now();
            true
        } else {
            false
        }
    }
}
