//! Bidirectional conversion between Earth civil time (UTC) and Mars local
//! time systems (LMST, LTST, MTC, MSD) for a fixed lander site, following
//! the Mars24 algorithm of Allison & McEwen (2000) with the patched
//! leap-second table.
//!
//! Keeping the engine in a library crate lets the CLI and config front-ends
//! share it; the engine is purely functional and holds no state beyond the
//! immutable [`SiteConfig`].

pub mod constants;
pub mod instant;
pub mod julian;
pub mod mars_clock;
pub mod mars_time;
pub mod orbit;
pub mod site;
pub mod solar;

pub use instant::{UtcParseError, parse_utc};
pub use mars_clock::{MarsClock, MarsClockError, MarsTimeSummary};
pub use mars_time::{MarsTime, MarsTimeParseError};
pub use site::{SiteConfig, SiteError};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
