//! Golden values pinned against the reference Mars24 chain at
//! 2019-06-12T06:28:00 UTC, plus range invariants over a long sweep.

use mars_time_converter::julian::j2000_offset_from_utc;
use mars_time_converter::orbit::{
    areocentric_longitude, equation_of_center, equation_of_time, fictional_mean_sun, mean_anomaly,
    perturbations,
};
use mars_time_converter::parse_utc;

const TOL: f64 = 1e-6;

fn reference_offset() -> f64 {
    let instant = parse_utc("2019-06-12T06:28:00Z").unwrap();
    j2000_offset_from_utc(&instant)
}

#[test]
fn reference_chain_produces_known_offset() {
    assert!((reference_offset() - 7101.7702451851).abs() < 1e-8);
}

#[test]
fn golden_orbital_elements() {
    let dt = reference_offset();
    assert!((mean_anomaly(dt) - 140.8619281742).abs() < TOL);
    assert!((fictional_mean_sun(dt) - 31.9880982244).abs() < TOL);
    assert!((perturbations(dt) - 0.0028538936).abs() < TOL);
    assert!((equation_of_center(dt) - 6.1845223478).abs() < TOL);
    assert!((areocentric_longitude(dt) - 38.1726205721).abs() < TOL);
    assert!((equation_of_time(dt) + 3.4384709846).abs() < TOL);
}

#[test]
fn angles_stay_in_range_over_three_mars_years() {
    // ~3 Mars years in TT days, sampled coarsely, including pre-2000 offsets
    let mut dt = -700.0;
    while dt < 1_400.0 * 3.0 {
        let m = mean_anomaly(dt);
        let fms = fictional_mean_sun(dt);
        let ls = areocentric_longitude(dt);
        assert!((0.0..360.0).contains(&m), "M={m} at dt={dt}");
        assert!((0.0..360.0).contains(&fms), "FMS={fms} at dt={dt}");
        assert!((0.0..360.0).contains(&ls), "Ls={ls} at dt={dt}");
        // the perturbation sum is a few millidegrees at most
        assert!(perturbations(dt).abs() < 0.03);
        // EOT stays within the published +-55 minute envelope (~14 degrees)
        assert!(equation_of_time(dt).abs() < 15.0);
        dt += 13.7;
    }
}

#[test]
fn equation_of_center_is_bounded_by_eccentricity_terms() {
    let mut dt = 0.0;
    while dt < 1_400.0 {
        assert!(equation_of_center(dt).abs() < 11.5);
        dt += 3.1;
    }
}
