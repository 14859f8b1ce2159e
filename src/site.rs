//! Immutable landing-site parameters supplied to the engine at construction.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Fixed parameters of a lander or rover site.
///
/// `sol_origin_epoch` defines the UTC instant of sol `sol_origin_ref`
/// midnight; it differs from `landing_epoch` because the landing sol is
/// usually shorter than a full sol. The record is validated once here and
/// never mutated, so conversions stay pure functions of their inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub landing_epoch: DateTime<Utc>,
    pub sol_origin_epoch: DateTime<Utc>,
    /// Offset added to the computed sol count; 1 for missions that number
    /// the landing sol as sol 1, 0 otherwise.
    pub sol_origin_ref: i64,
    /// Planetographic east longitude in degrees, [0, 360).
    pub longitude: f64,
    /// Planetographic latitude in degrees, [-90, 90].
    pub latitude: f64,
}

/// Validation failure while building a [`SiteConfig`]. Raised at
/// construction, never deferred into a conversion call.
#[derive(Debug, Error, PartialEq)]
pub enum SiteError {
    #[error("longitude {0} outside [0, 360) degrees east")]
    Longitude(f64),
    #[error("latitude {0} outside [-90, 90] degrees")]
    Latitude(f64),
}

impl SiteConfig {
    pub fn new(
        landing_epoch: DateTime<Utc>,
        sol_origin_epoch: DateTime<Utc>,
        sol_origin_ref: i64,
        longitude: f64,
        latitude: f64,
    ) -> Result<Self, SiteError> {
        if !(0.0..360.0).contains(&longitude) || !longitude.is_finite() {
            return Err(SiteError::Longitude(longitude));
        }
        if !(-90.0..=90.0).contains(&latitude) || !latitude.is_finite() {
            return Err(SiteError::Latitude(latitude));
        }
        Ok(SiteConfig {
            landing_epoch,
            sol_origin_epoch,
            sol_origin_ref,
            longitude,
            latitude,
        })
    }
}
