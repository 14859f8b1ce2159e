//! Fixed constants of the Mars24 algorithm, expressed in SI units unless
//! stated otherwise. Numerical values follow the patched algorithm page
//! (AM2000 with post-publication corrections), not the 2000 article.

/// Julian day number of the Unix epoch, 1970-01-01T00:00:00 UTC.
pub const JULIAN_UNIX_EPOCH: f64 = 2_440_587.5;

/// Julian day number of the J2000 epoch, 2000-01-01T12:00:00 TT.
pub const J2000_EPOCH_JD: f64 = 2_451_545.0;

/// Seconds per Julian day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Ratio between a Martian sol and a terrestrial day (AM2000, eq. 22).
pub const SOL_RATIO: f64 = 1.027_491_251_7;

/// Allison's small correction constant k (AM2000, eq. 22, patched value).
pub const ALLISON_K: f64 = 0.000_962_6;

/// Allison's normalisation count, keeping the Mars Sol Date positive for
/// any date after 1873.
pub const ALLISON_KNORM: f64 = 44_796.0;

/// Length of one Martian sol in SI seconds, as measured between the sol 1
/// and sol 2 boundaries of the InSight mission (2018-11-27T05:50:25.580014Z
/// to 2018-11-28T06:30:00.823990Z), less a 5 microsecond empirical trim.
///
/// Operational sol numbering divides elapsed real seconds by this constant
/// instead of walking the orbital-element chain; see
/// [`crate::mars_clock::MarsClock::sol_number`].
pub const SECONDS_PER_SOL: f64 = 88_775.243_971;

/// TT-UT offset in seconds assumed by the inverse (Mars-to-UTC) transform.
///
/// The forward direction uses the historical leap-second table in
/// [`crate::julian`]; the inverse keeps this fixed modern value to match the
/// reference algorithm's worked example. The asymmetry is intentional and
/// becomes a precision gap for dates where the true offset diverges.
pub const TT_UT_INVERSE_OFFSET_SECONDS: f64 = 69.184;
