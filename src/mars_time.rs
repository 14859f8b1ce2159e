//! The structured Mars time value `SSSST HH:MM:SS.ffffff` and its parsing
//! and formatting.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A point in mission time: integer sol plus time of day on the Martian
/// 24-hour clock face.
///
/// The structured fields and the decimal-sol form stay mutually consistent:
/// `as_decimal_sol` recombines exactly what `from_decimal_sol` split apart,
/// up to the one-microsecond truncation of the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarsTime {
    pub sol: i64,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub microsecond: u32,
}

/// Error raised for malformed Mars time strings. Parsing never yields a
/// partial value; the offending fragment is carried for diagnostics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarsTimeParseError {
    #[error("invalid sol number '{0}'")]
    Sol(String),
    #[error("invalid {field} field in Mars time '{input}'")]
    Field { field: &'static str, input: String },
    #[error("{field} out of range in Mars time '{input}'")]
    Range { field: &'static str, input: String },
}

impl MarsTime {
    /// Split a decimal sol count into structured fields. The cascade floors
    /// each component, matching the reference formatter, so microseconds
    /// truncate rather than round.
    pub fn from_decimal_sol(raw_sol: f64) -> Self {
        let sol = raw_sol.floor();
        let hour_decimal = 24.0 * (raw_sol - sol);
        let hour = hour_decimal.floor();
        let minute_decimal = 60.0 * (hour_decimal - hour);
        let minute = minute_decimal.floor();
        let second_decimal = 60.0 * (minute_decimal - minute);
        let second = second_decimal.floor();
        let microsecond = ((second_decimal - second) * 1_000_000.0) as u32;
        MarsTime {
            sol: sol as i64,
            hour: hour as u8,
            minute: minute as u8,
            second: second as u8,
            microsecond: microsecond.min(999_999),
        }
    }

    /// Build a value from an integer sol and a decimal hour in [0, 24).
    pub fn from_sol_and_hours(sol: i64, hours: f64) -> Self {
        let mut mt = Self::from_decimal_sol(hours / 24.0);
        mt.sol = sol;
        mt
    }

    /// Decimal sol count equivalent to the structured fields.
    pub fn as_decimal_sol(&self) -> f64 {
        self.sol as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1_440.0
            + self.second as f64 / 86_400.0
            + self.microsecond as f64 / 86_400.0e6
    }

    /// Time of day as decimal hours in [0, 24).
    pub fn hours(&self) -> f64 {
        self.hour as f64
            + self.minute as f64 / 60.0
            + self.second as f64 / 3_600.0
            + self.microsecond as f64 / 3_600.0e6
    }
}

impl fmt::Display for MarsTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}T{:02}:{:02}:{:02}.{:06}",
            self.sol, self.hour, self.minute, self.second, self.microsecond
        )
    }
}

impl FromStr for MarsTime {
    type Err = MarsTimeParseError;

    /// Parse `SSSST HH:MM[:SS[.ffffff]]` (no literal space; the `T` joins the
    /// sol count and the clock time).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (sol_str, time_str) = s.split_once('T').ok_or_else(|| MarsTimeParseError::Field {
            field: "separator",
            input: s.to_string(),
        })?;
        let sol: i64 = sol_str
            .parse()
            .map_err(|_| MarsTimeParseError::Sol(sol_str.to_string()))?;

        let mut parts = time_str.split(':');
        let hour = parse_component(parts.next(), "hour", s)?;
        let minute = parse_component(parts.next(), "minute", s)?;
        let (second, microsecond) = match parts.next() {
            Some(sec_str) => parse_seconds(sec_str, s)?,
            None => (0, 0),
        };
        if parts.next().is_some() {
            return Err(MarsTimeParseError::Field {
                field: "time",
                input: s.to_string(),
            });
        }
        if hour >= 24 {
            return Err(MarsTimeParseError::Range {
                field: "hour",
                input: s.to_string(),
            });
        }
        if minute >= 60 {
            return Err(MarsTimeParseError::Range {
                field: "minute",
                input: s.to_string(),
            });
        }
        if second >= 60 {
            return Err(MarsTimeParseError::Range {
                field: "second",
                input: s.to_string(),
            });
        }
        Ok(MarsTime {
            sol,
            hour,
            minute,
            second,
            microsecond,
        })
    }
}

fn parse_component(
    part: Option<&str>,
    field: &'static str,
    input: &str,
) -> Result<u8, MarsTimeParseError> {
    part.and_then(|p| p.parse::<u8>().ok())
        .ok_or_else(|| MarsTimeParseError::Field {
            field,
            input: input.to_string(),
        })
}

fn parse_seconds(sec_str: &str, input: &str) -> Result<(u8, u32), MarsTimeParseError> {
    let (whole, frac) = match sec_str.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (sec_str, None),
    };
    let second: u8 = whole.parse().map_err(|_| MarsTimeParseError::Field {
        field: "second",
        input: input.to_string(),
    })?;
    let microsecond = match frac {
        Some(f) => {
            if f.is_empty() || f.len() > 6 || !f.bytes().all(|b| b.is_ascii_digit()) {
                return Err(MarsTimeParseError::Field {
                    field: "microsecond",
                    input: input.to_string(),
                });
            }
            // right-pad to six digits: ".5" means 500000 us
            let padded = format!("{f:0<6}");
            padded.parse::<u32>().map_err(|_| MarsTimeParseError::Field {
                field: "microsecond",
                input: input.to_string(),
            })?
        }
        None => 0,
    };
    Ok((second, microsecond))
}
