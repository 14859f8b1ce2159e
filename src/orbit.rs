//! Mars orbital-element formulas of AM2000, section B.
//!
//! Every function is a pure, total map from the J2000 TT-day offset (which
//! may be negative for pre-2000 dates) to an angle in degrees.

/// Harmonic perturbation terms (amplitude in degrees, period in years,
/// phase in degrees) from AM2000, eq. 18.
const PERTURBATION_TERMS: [(f64, f64, f64); 7] = [
    (0.0071, 2.2353, 49.409),
    (0.0057, 2.7543, 168.173),
    (0.0039, 1.1177, 191.837),
    (0.0037, 15.7866, 21.736),
    (0.0021, 2.1354, 15.704),
    (0.0020, 2.4694, 95.528),
    (0.0018, 32.8493, 49.095),
];

/// Mars mean anomaly M in degrees (AM2000, eq. 16).
pub fn mean_anomaly(j2000_offset: f64) -> f64 {
    (19.3871 + 0.52402073 * j2000_offset).rem_euclid(360.0)
}

/// Angle of the fictional mean sun in degrees (AM2000, eq. 17).
pub fn fictional_mean_sun(j2000_offset: f64) -> f64 {
    (270.3871 + 0.524038496 * j2000_offset).rem_euclid(360.0)
}

/// Sum of the periodic perturbations to the mean sun angle, in degrees
/// (AM2000, eq. 18). The seven terms are summed in table order so results
/// reproduce bit-for-bit across runs.
pub fn perturbations(j2000_offset: f64) -> f64 {
    let mut pbs = 0.0;
    for (amplitude, period, phase) in PERTURBATION_TERMS {
        pbs += amplitude * ((0.985626 * j2000_offset / period + phase).to_radians()).cos();
    }
    pbs
}

/// Equation of center, the angular difference between the true and mean
/// anomaly, in degrees (bracketed term of AM2000, eqs. 19 and 20).
pub fn equation_of_center(j2000_offset: f64) -> f64 {
    let m = mean_anomaly(j2000_offset).to_radians();
    (10.691 + 3.0e-7 * j2000_offset) * m.sin()
        + 0.6230 * (2.0 * m).sin()
        + 0.0500 * (3.0 * m).sin()
        + 0.0050 * (4.0 * m).sin()
        + 0.0005 * (5.0 * m).sin()
        + perturbations(j2000_offset)
}

/// Areocentric solar longitude Ls in degrees, in [0, 360) (AM2000, eq. 19).
pub fn areocentric_longitude(j2000_offset: f64) -> f64 {
    (fictional_mean_sun(j2000_offset) + equation_of_center(j2000_offset)).rem_euclid(360.0)
}

/// Equation of time in degrees, the offset between local mean and local
/// true solar time (AM2000, eq. 20).
pub fn equation_of_time(j2000_offset: f64) -> f64 {
    let ls = areocentric_longitude(j2000_offset).to_radians();
    2.861 * (2.0 * ls).sin() - 0.071 * (4.0 * ls).sin() + 0.002 * (6.0 * ls).sin()
        - equation_of_center(j2000_offset)
}
