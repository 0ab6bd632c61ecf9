//! Time source for the date updater.

use chrono::{DateTime, Utc};

/// Source of the "now" instant stamped into a subscription.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A single clock reading rendered in both header formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamps {
    /// `YYYYMMDDhhmm`, used for `! Version:`.
    pub version: String,
    /// `DD Mon YYYY hh:mm UTC`, used for `! Last modified:`.
    pub last_modified: String,
}

impl Timestamps {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            version: instant.format("%Y%m%d%H%M").to_string(),
            last_modified: instant.format("%d %b %Y %H:%M %Z").to_string(),
        }
    }

    /// Reads `clock` once.
    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::at(clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_both_fields() {
        let ts = Timestamps::at(Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap());
        assert_eq!(ts.version, "202403151030");
        assert_eq!(ts.last_modified, "15 Mar 2024 10:30 UTC");
    }

    #[test]
    fn zero_pads_small_values() {
        let ts = Timestamps::at(Utc.with_ymd_and_hms(2009, 1, 2, 3, 4, 59).unwrap());
        assert_eq!(ts.version, "200901020304");
        assert_eq!(ts.last_modified, "02 Jan 2009 03:04 UTC");
    }

    #[test]
    fn fixed_clock_is_stable() {
        let instant = Utc.with_ymd_and_hms(2020, 12, 31, 23, 59, 0).unwrap();
        let clock = FixedClock(instant);
        assert_eq!(Timestamps::from_clock(&clock), Timestamps::from_clock(&clock));
    }
}
