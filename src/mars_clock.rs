//! The Mars clock proper: Coordinated Mars Time, Mars Sol Date, local mean
//! and true solar time for a configured site, and the inverse transform
//! back to UTC.
//!
//! The forward path chains `julian` and `orbit`; the inverse algebraically
//! unwinds the same equations, which is only possible because
//! [`MarsClock::coordinated_mars_time`] leaves its result un-reduced.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::constants::{
    ALLISON_K, ALLISON_KNORM, J2000_EPOCH_JD, SECONDS_PER_DAY, SECONDS_PER_SOL, SOL_RATIO,
    TT_UT_INVERSE_OFFSET_SECONDS,
};
use crate::julian::{self, JulianRangeError};
use crate::mars_time::{MarsTime, MarsTimeParseError};
use crate::orbit;
use crate::site::SiteConfig;

/// An LMST at or past this reading means the real-time sol count and the
/// orbital model disagree by one near the sol boundary; the displayed sol
/// is decremented to reconcile them.
const LMST_ROLLOVER_GUARD: f64 = 23.99;

/// Empirical correction applied to bare-sol inverse conversions, in
/// seconds. Compensates the systematic bias of the fixed TT-UT constant
/// relative to the table-driven forward path.
const BARE_SOL_CORRECTION_SECONDS: f64 = 0.466;

/// Conversion failure in [`MarsClock`]. Parse errors never yield partial
/// results; range errors only occur for Mars times outside the epoch range
/// UTC can represent.
#[derive(Debug, Error)]
pub enum MarsClockError {
    #[error(transparent)]
    Parse(#[from] MarsTimeParseError),
    #[error(transparent)]
    Range(#[from] JulianRangeError),
    #[error("invalid decimal sol count '{0}'")]
    SolNumber(String),
}

/// Mars time engine for one landing site. Stateless across calls; safe to
/// share between threads.
#[derive(Debug, Clone)]
pub struct MarsClock {
    site: SiteConfig,
}

impl MarsClock {
    pub fn new(site: SiteConfig) -> Self {
        MarsClock { site }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Mean solar time at the Martian prime meridian in hours (AM2000,
    /// eq. 22, modified).
    ///
    /// Deliberately NOT reduced modulo 24: the whole-sol part is what the
    /// inverse transform recovers. Callers wanting a clock-face reading
    /// apply `rem_euclid(24.0)` themselves.
    pub fn coordinated_mars_time(j2000_offset: f64) -> f64 {
        24.0 * (((j2000_offset - 4.5) / SOL_RATIO) + ALLISON_KNORM - ALLISON_K)
    }

    /// Mars Sol Date, the Martian analogue of the Julian day count
    /// (AM2000, eq. 22).
    pub fn mars_sol_date(j2000_offset: f64) -> f64 {
        ((j2000_offset - 4.5) / SOL_RATIO) + ALLISON_KNORM - ALLISON_K
    }

    /// Local mean solar time at the site longitude, decimal hours in
    /// [0, 24) (Mars24 eq. C-3).
    pub fn lmst_hours(&self, j2000_offset: f64) -> f64 {
        let mtc = Self::coordinated_mars_time(j2000_offset).rem_euclid(24.0);
        (mtc - self.site.longitude * (24.0 / 360.0)).rem_euclid(24.0)
    }

    /// Local true solar time at the site longitude, decimal hours in
    /// [0, 24) (AM2000, eqs. 23 and 24).
    pub fn ltst_hours(&self, j2000_offset: f64) -> f64 {
        (self.lmst_hours(j2000_offset) + orbit::equation_of_time(j2000_offset) / 15.0)
            .rem_euclid(24.0)
    }

    /// Decimal sol count for an instant, from elapsed real seconds since
    /// the sol origin divided by the measured sol length, plus the
    /// mission's numbering offset.
    ///
    /// Sol boundaries follow elapsed real time by operational convention;
    /// deriving the count from the orbital chain instead would compound its
    /// floating error into the integer sol.
    pub fn sol_number(&self, instant: &DateTime<Utc>) -> f64 {
        let elapsed = (instant.timestamp_micros() - self.site.sol_origin_epoch.timestamp_micros())
            as f64
            / 1_000_000.0;
        elapsed / SECONDS_PER_SOL + self.site.sol_origin_ref as f64
    }

    /// Local mean solar time for a UTC instant.
    ///
    /// The integer sol comes from [`Self::sol_number`], the time of day
    /// from the orbital-model LMST. The two can disagree by one sol right
    /// at a boundary; an LMST reading at or past 23.99 flags that case and
    /// the displayed sol is decremented.
    pub fn utc_to_lmst(&self, instant: &DateTime<Utc>) -> MarsTime {
        let mut sol = self.sol_number(instant).floor() as i64;
        let lmst = self.lmst_hours(julian::j2000_offset_from_utc(instant));
        if lmst >= LMST_ROLLOVER_GUARD {
            sol -= 1;
        }
        MarsTime::from_sol_and_hours(sol, lmst)
    }

    /// Local true solar time for a UTC instant. The equation-of-time shift
    /// can wrap the clock face; the sol number follows the wrap.
    pub fn utc_to_ltst(&self, instant: &DateTime<Utc>) -> MarsTime {
        let j2000_offset = julian::j2000_offset_from_utc(instant);
        let mut sol = self.sol_number(instant).floor() as i64;
        let ltst =
            self.lmst_hours(j2000_offset) + orbit::equation_of_time(j2000_offset) / 15.0;
        if ltst < 0.0 {
            sol -= 1;
        } else if ltst >= 24.0 {
            sol += 1;
        }
        MarsTime::from_sol_and_hours(sol, ltst.rem_euclid(24.0))
    }

    /// Areocentric solar longitude for a UTC instant, degrees in [0, 360).
    pub fn utc_to_ls(&self, instant: &DateTime<Utc>) -> f64 {
        orbit::areocentric_longitude(julian::j2000_offset_from_utc(instant))
    }

    /// Equation of time for a UTC instant, in degrees.
    pub fn utc_to_eot(&self, instant: &DateTime<Utc>) -> f64 {
        orbit::equation_of_time(julian::j2000_offset_from_utc(instant))
    }

    /// UTC instant for a structured Mars time.
    ///
    /// Unwinds the MTC chain: the un-reduced MTC of the sol origin plus the
    /// requested sols and hours, inverted through AM2000 eq. 22 back to a
    /// TT Julian day, then to UT with the fixed 69.184 s constant. The
    /// constant intentionally differs from the forward table lookup; see
    /// [`crate::constants::TT_UT_INVERSE_OFFSET_SECONDS`].
    pub fn to_utc(&self, mars_time: &MarsTime) -> Result<DateTime<Utc>, MarsClockError> {
        let sols = (mars_time.sol - self.site.sol_origin_ref) as f64;
        Ok(self.invert_mtc(sols, mars_time.hours())?)
    }

    /// UTC instant of Mars midnight for a (possibly fractional) sol count,
    /// with the fixed bare-sol bias correction applied.
    pub fn sol_to_utc(&self, sol: f64) -> Result<DateTime<Utc>, MarsClockError> {
        let instant = self.invert_mtc(sol - self.site.sol_origin_ref as f64, 0.0)?;
        Ok(instant + Duration::microseconds((BARE_SOL_CORRECTION_SECONDS * 1e6) as i64))
    }

    /// UTC instant for a Mars time string: either `SSSST HH:MM[:SS[.ffffff]]`
    /// (structured, no bias correction) or a bare decimal sol count (bias
    /// corrected).
    pub fn lmst_to_utc(&self, input: &str) -> Result<DateTime<Utc>, MarsClockError> {
        let trimmed = input.trim();
        if trimmed.contains('T') {
            let mars_time: MarsTime = trimmed.parse()?;
            self.to_utc(&mars_time)
        } else {
            let sol: f64 = trimmed
                .parse()
                .map_err(|_| MarsClockError::SolNumber(trimmed.to_string()))?;
            self.sol_to_utc(sol)
        }
    }

    fn invert_mtc(&self, sols: f64, hours: f64) -> Result<DateTime<Utc>, JulianRangeError> {
        let origin_offset = julian::j2000_offset_from_utc(&self.site.sol_origin_epoch);
        let mtc = Self::coordinated_mars_time(origin_offset) + sols * 24.0 + hours;
        let j2000_offset = (mtc / 24.0 - ALLISON_KNORM + ALLISON_K) * SOL_RATIO + 4.5;
        let jd_tt = j2000_offset + J2000_EPOCH_JD;
        let jd_ut = jd_tt - TT_UT_INVERSE_OFFSET_SECONDS / SECONDS_PER_DAY;
        julian::instant_from_julian_day(jd_ut)
    }

    /// All intermediate quantities of the forward chain for one instant,
    /// for reporting and diagnostics.
    pub fn summary(&self, instant: &DateTime<Utc>) -> MarsTimeSummary {
        let jd_utc = julian::julian_day_utc(instant);
        let jd_tt = julian::julian_day_tt(jd_utc);
        let j2000_offset = julian::j2000_offset(jd_tt);
        MarsTimeSummary {
            utc: *instant,
            jd_utc,
            jd_tt,
            j2000_offset,
            mean_anomaly: orbit::mean_anomaly(j2000_offset),
            fictional_mean_sun: orbit::fictional_mean_sun(j2000_offset),
            perturbations: orbit::perturbations(j2000_offset),
            equation_of_center: orbit::equation_of_center(j2000_offset),
            areocentric_longitude: orbit::areocentric_longitude(j2000_offset),
            equation_of_time: orbit::equation_of_time(j2000_offset),
            mars_sol_date: Self::mars_sol_date(j2000_offset),
            mtc_hours: Self::coordinated_mars_time(j2000_offset).rem_euclid(24.0),
            sol_number: self.sol_number(instant),
            lmst: self.utc_to_lmst(instant),
            ltst: self.utc_to_ltst(instant),
        }
    }
}

/// Snapshot of every quantity the forward chain produces for one instant.
#[derive(Debug, Clone)]
pub struct MarsTimeSummary {
    pub utc: DateTime<Utc>,
    pub jd_utc: f64,
    pub jd_tt: f64,
    pub j2000_offset: f64,
    pub mean_anomaly: f64,
    pub fictional_mean_sun: f64,
    pub perturbations: f64,
    pub equation_of_center: f64,
    pub areocentric_longitude: f64,
    pub equation_of_time: f64,
    pub mars_sol_date: f64,
    pub mtc_hours: f64,
    pub sol_number: f64,
    pub lmst: MarsTime,
    pub ltst: MarsTime,
}
