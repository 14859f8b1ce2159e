use mars_time_converter::julian::{
    instant_from_julian_day, j2000_offset, julian_day_tt, julian_day_utc, tt_offset_seconds,
};
use mars_time_converter::parse_utc;

#[test]
fn noon_2000_01_01_is_j2000_in_utc_days() {
    let instant = parse_utc("2000-01-01T12:00:00Z").unwrap();
    assert_eq!(julian_day_utc(&instant), 2_451_545.0);
}

#[test]
fn unix_epoch_maps_to_julian_unix_epoch() {
    let instant = parse_utc("1970-01-01T00:00:00Z").unwrap();
    assert_eq!(julian_day_utc(&instant), 2_440_587.5);
}

#[test]
fn tt_offset_intervals_are_closed_left_open_right() {
    // 1972-01-01 boundary: the new interval starts exactly on the boundary day
    assert_eq!(tt_offset_seconds(2_441_317.5), 42.184);
    assert_eq!(tt_offset_seconds(2_441_317.49), 0.0);
    // one day short of the next breakpoint still uses the current interval
    assert_eq!(tt_offset_seconds(2_441_317.5 + 181.0), 42.184);
    assert_eq!(tt_offset_seconds(2_441_317.5 + 182.0), 43.184);
}

#[test]
fn tt_offset_clamps_outside_the_table() {
    // far past: last published entry, not extrapolated
    assert_eq!(tt_offset_seconds(2_441_317.5 + 16_437.0), 69.184);
    assert_eq!(tt_offset_seconds(1.0e7), 69.184);
    // far past the other way
    assert_eq!(tt_offset_seconds(-5.0), 0.0);
}

#[test]
fn tt_offset_at_j2000_is_64_184() {
    assert_eq!(tt_offset_seconds(2_451_545.0), 64.184);
}

#[test]
fn tt_julian_day_adds_offset_in_days() {
    let jd = 2_451_545.0;
    let expected = jd + 64.184 / 86_400.0;
    assert!((julian_day_tt(jd) - expected).abs() < 1e-12);
    assert!((j2000_offset(expected) - 64.184 / 86_400.0).abs() < 1e-12);
}

#[test]
fn julian_day_round_trips_through_instant() {
    let instant = parse_utc("2019-06-12T06:28:00Z").unwrap();
    let jd = julian_day_utc(&instant);
    let back = instant_from_julian_day(jd).unwrap();
    assert!((back.timestamp_micros() - instant.timestamp_micros()).abs() <= 1);
}

#[test]
fn absurd_julian_day_is_rejected() {
    assert!(instant_from_julian_day(f64::INFINITY).is_err());
    assert!(instant_from_julian_day(1.0e18).is_err());
}
