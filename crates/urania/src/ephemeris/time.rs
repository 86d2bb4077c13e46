//! Julian-day instants and civil-time conversion.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Julian day of 1970-01-01T00:00:00Z
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Continuous astronomical day count (UT).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianDay(pub f64);

impl JulianDay {
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        let seconds = dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1e9;
        JulianDay(UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY)
    }

    /// Civil local time at a fixed UTC offset (whole hours).
    ///
    /// `None` when the shifted instant leaves chrono's range.
    pub fn from_local(local: NaiveDateTime, utc_offset_hours: i32) -> Option<Self> {
        let utc = local.checked_sub_signed(Duration::hours(i64::from(utc_offset_hours)))?;
        Some(Self::from_utc(Utc.from_utc_datetime(&utc)))
    }

    /// Back to UTC, rounded to the millisecond. `None` outside chrono's range.
    pub fn to_utc(self) -> Option<DateTime<Utc>> {
        let millis = ((self.0 - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
        if !millis.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis(millis as i64)
    }

    pub fn to_local(self, utc_offset_hours: i32) -> Option<NaiveDateTime> {
        self.to_utc()?
            .naive_utc()
            .checked_add_signed(Duration::hours(i64::from(utc_offset_hours)))
    }

    pub fn plus_days(self, days: f64) -> Self {
        JulianDay(self.0 + days)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}
