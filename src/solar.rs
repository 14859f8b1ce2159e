//! Solar geometry at the landing site: declination, elevation and azimuth
//! of the sun (Mars24 section D).

use chrono::{DateTime, Utc};

use crate::julian;
use crate::mars_clock::MarsClock;
use crate::orbit;
use crate::site::SiteConfig;

/// Solar declination in degrees for a J2000 TT-day offset (AM1997, eq. D5).
pub fn solar_declination(j2000_offset: f64) -> f64 {
    let ls = orbit::areocentric_longitude(j2000_offset).to_radians();
    (0.42565 * ls.sin()).asin().to_degrees() + 0.25 * ls.sin()
}

/// Solar declination in degrees for a UTC instant.
pub fn solar_declination_at(instant: &DateTime<Utc>) -> f64 {
    solar_declination(julian::j2000_offset_from_utc(instant))
}

/// Planetographic east longitude of the subsolar point, degrees in [0, 360).
pub fn subsolar_longitude(j2000_offset: f64) -> f64 {
    let mtc = MarsClock::coordinated_mars_time(j2000_offset).rem_euclid(24.0);
    (mtc * (360.0 / 24.0) + orbit::equation_of_time(j2000_offset) + 180.0).rem_euclid(360.0)
}

/// Solar elevation above the horizon at the site, in degrees (Mars24
/// section D-5). Negative below the horizon; range [-90, 90].
pub fn solar_elevation(site: &SiteConfig, instant: &DateTime<Utc>) -> f64 {
    let j2000_offset = julian::j2000_offset_from_utc(instant);
    let declination = solar_declination(j2000_offset).to_radians();
    let latitude = site.latitude.to_radians();
    let hour_angle = (site.longitude.rem_euclid(360.0) - subsolar_longitude(j2000_offset)).to_radians();
    let zenith = (declination.sin() * latitude.sin()
        + declination.cos() * latitude.cos() * hour_angle.cos())
    .acos()
    .to_degrees();
    90.0 - zenith
}

/// Solar azimuth at the site, degrees in [0, 360) (Mars24 section D-6).
///
/// Known discontinuity: when the sun stands near the local zenith the
/// arc-tangent denominator approaches zero and the result jumps between
/// the ±90 degree branches. The raw arc-tangent value is propagated as-is.
pub fn solar_azimuth(site: &SiteConfig, instant: &DateTime<Utc>) -> f64 {
    let j2000_offset = julian::j2000_offset_from_utc(instant);
    let declination = solar_declination(j2000_offset).to_radians();
    let latitude = site.latitude.to_radians();
    let hour_angle = (site.longitude.rem_euclid(360.0) - subsolar_longitude(j2000_offset)).to_radians();
    let azimuth = (hour_angle.sin()
        / (latitude.cos() * declination.tan() - latitude.sin() * hour_angle.cos()))
    .atan()
    .to_degrees();
    azimuth.rem_euclid(360.0)
}
