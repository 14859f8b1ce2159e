//! Julian day arithmetic and the UTC to Terrestrial Time offset table
//! (Mars24 eqs. A-2 through A-6).
//!
//! UTC and TT Julian days share the `f64` representation; which time scale a
//! value carries is a calling convention, never a type distinction.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::constants::{J2000_EPOCH_JD, JULIAN_UNIX_EPOCH, SECONDS_PER_DAY};

/// Base Julian day of the leap-second table, 1972-01-01T00:00:00 UTC.
const LEAP_TABLE_BASE_JD: f64 = 2_441_317.5;

/// TT-TAI offset in seconds.
const TT_TAI_SECONDS: f64 = 32.184;

/// Day boundaries of the leap-second intervals, relative to
/// [`LEAP_TABLE_BASE_JD`]. The leading entry pins the clamp floor at JD 0.
const LEAP_DAY_OFFSETS: [f64; 29] = [
    -2_441_317.5,
    0.0,
    182.0,
    366.0,
    731.0,
    1_096.0,
    1_461.0,
    1_827.0,
    2_192.0,
    2_557.0,
    2_922.0,
    3_469.0,
    3_834.0,
    4_199.0,
    4_930.0,
    5_844.0,
    6_575.0,
    6_940.0,
    7_487.0,
    7_852.0,
    8_217.0,
    8_766.0,
    9_313.0,
    9_862.0,
    12_419.0,
    13_515.0,
    14_792.0,
    15_887.0,
    16_437.0,
];

/// TAI-UTC leap seconds in effect from the matching boundary onwards.
const LEAP_SECOND_VALUES: [f64; 29] = [
    -32.184, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0, 20.0, 21.0, 22.0, 23.0,
    24.0, 25.0, 26.0, 27.0, 28.0, 29.0, 30.0, 31.0, 32.0, 33.0, 34.0, 35.0, 36.0, 37.0,
];

/// Error raised when a Julian day falls outside the representable UTC range.
#[derive(Debug, Error)]
#[error("julian day {0} is outside the representable UTC range")]
pub struct JulianRangeError(pub f64);

/// UTC Julian day number of an instant (Mars24 eq. A-2).
pub fn julian_day_utc(instant: &DateTime<Utc>) -> f64 {
    let seconds = instant.timestamp_micros() as f64 / 1_000_000.0;
    JULIAN_UNIX_EPOCH + seconds / SECONDS_PER_DAY
}

/// UTC instant for a UTC Julian day number, at microsecond resolution.
pub fn instant_from_julian_day(jd_utc: f64) -> Result<DateTime<Utc>, JulianRangeError> {
    let seconds = (jd_utc - JULIAN_UNIX_EPOCH) * SECONDS_PER_DAY;
    let micros = (seconds * 1_000_000.0).round();
    if !micros.is_finite() || micros.abs() >= i64::MAX as f64 {
        return Err(JulianRangeError(jd_utc));
    }
    DateTime::from_timestamp_micros(micros as i64).ok_or(JulianRangeError(jd_utc))
}

/// UTC to TT offset in seconds for a UTC Julian day (Mars24 eq. A-4).
///
/// Linear scan over the historical table: each interval is closed on the
/// left and open on the right. Days before the first boundary clamp to the
/// first offset, days past the last published entry clamp to the last; the
/// table is deliberately not extrapolated.
pub fn tt_offset_seconds(jd_utc: f64) -> f64 {
    if jd_utc <= LEAP_TABLE_BASE_JD + LEAP_DAY_OFFSETS[0] {
        return TT_TAI_SECONDS + LEAP_SECOND_VALUES[0];
    }
    if jd_utc >= LEAP_TABLE_BASE_JD + LEAP_DAY_OFFSETS[LEAP_DAY_OFFSETS.len() - 1] {
        return TT_TAI_SECONDS + LEAP_SECOND_VALUES[LEAP_SECOND_VALUES.len() - 1];
    }
    for i in 0..LEAP_DAY_OFFSETS.len() - 1 {
        if LEAP_TABLE_BASE_JD + LEAP_DAY_OFFSETS[i] <= jd_utc
            && LEAP_TABLE_BASE_JD + LEAP_DAY_OFFSETS[i + 1] > jd_utc
        {
            return TT_TAI_SECONDS + LEAP_SECOND_VALUES[i];
        }
    }
    TT_TAI_SECONDS + LEAP_SECOND_VALUES[LEAP_SECOND_VALUES.len() - 1]
}

/// TT Julian day for a UTC Julian day (Mars24 eq. A-5).
pub fn julian_day_tt(jd_utc: f64) -> f64 {
    jd_utc + tt_offset_seconds(jd_utc) / SECONDS_PER_DAY
}

/// Offset in days from the J2000 epoch for a TT Julian day (Mars24 eq. A-6).
pub fn j2000_offset(jd_tt: f64) -> f64 {
    jd_tt - J2000_EPOCH_JD
}

/// Full chain from a UTC instant to the J2000 TT-day offset.
pub fn j2000_offset_from_utc(instant: &DateTime<Utc>) -> f64 {
    j2000_offset(julian_day_tt(julian_day_utc(instant)))
}
