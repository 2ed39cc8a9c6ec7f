//! service-day reference midnight policy.
//!
//! the API reports arrival times as seconds since the start of the
//! service day, not since local midnight: vehicles still running after
//! midnight belong to the previous day's schedule. by transit
//! convention the cutover is 04:00 local — before that hour, the
//! reference midnight is yesterday's. this is a scheduling convention,
//! not something derivable from the data.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::horaire::Seconds;

/// before this local hour, arrivals count from the previous day's midnight.
pub const ROLLOVER_HOUR: u32 = 4;

/// the midnight that realtime arrival seconds are measured against.
pub fn reference_midnight(now: NaiveDateTime) -> NaiveDateTime {
    let date = if now.hour() < ROLLOVER_HOUR {
        now.date() - Duration::days(1)
    } else {
        now.date()
    };
    NaiveDateTime::new(date, NaiveTime::MIN)
}

/// seconds elapsed since the service-day reference midnight, for
/// comparison against arrival values.
pub fn seconds_since_midnight(now: NaiveDateTime) -> i64 {
    (now - reference_midnight(now)).num_seconds()
}

/// guessed wall-clock instant of a realtime arrival value. only valid
/// for realtime arrivals, whose reference midnight must be inferred
/// from `now`.
pub fn arrival_datetime(seconds: Seconds, now: NaiveDateTime) -> NaiveDateTime {
    reference_midnight(now) + Duration::seconds(seconds as i64)
}

/// wall-clock instant of a theoretical arrival on an explicit service
/// date; no rollover guessing is needed since the day is given.
pub fn arrival_datetime_on(seconds: Seconds, date: NaiveDate) -> NaiveDateTime {
    NaiveDateTime::new(date, NaiveTime::MIN) + Duration::seconds(seconds as i64)
}
