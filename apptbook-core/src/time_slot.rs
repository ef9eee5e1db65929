//! Minute ranges within a day, used for double-booking checks.

use std::fmt;

use chrono::{NaiveTime, Timelike};

/// A half-open `[start, end)` range in minutes since midnight.
///
/// The end may run past 24:00 for late, long appointments; it is never
/// wrapped into the next day. Bounds are `u64` so any `u32` duration fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: u64,
    pub end: u64,
}

impl TimeSlot {
    pub fn from_start(time: NaiveTime, duration: u32) -> Self {
        let start = u64::from(to_minutes(time));
        TimeSlot {
            start,
            end: start + u64::from(duration),
        }
    }

    /// Touching endpoints do not overlap: 09:00-09:30 and 09:30-10:00 are both bookable.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}

/// Minutes since midnight (`hours * 60 + minutes`); seconds are ignored.
pub fn to_minutes(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}
