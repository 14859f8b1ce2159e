//! Mission catalog models and loaders for the Mars time converter.
//!
//! A mission record carries the landing-site parameters the engine needs,
//! in the text forms mission documentation uses (day-of-year or ISO dates).
//! Records load from TOML files (one per mission, or a directory of them)
//! or from a YAML list, and validate into engine [`SiteConfig`] values.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use mars_time_converter::{SiteConfig, SiteError, UtcParseError, parse_utc};

/// Landing-site record parsed from mission catalogs.
#[derive(Debug, Deserialize, Clone)]
pub struct MissionConfig {
    pub name: String,
    #[serde(default)]
    pub landing_site: Option<String>,
    /// Landing instant, ISO-8601 or day-of-year form.
    pub landing_date: String,
    /// Instant of sol `sol_origin_ref` midnight.
    pub sol_origin: String,
    #[serde(default)]
    pub sol_origin_ref: i64,
    /// Planetographic east longitude, degrees.
    pub longitude: f64,
    /// Planetographic latitude, degrees.
    pub latitude: f64,
}

/// Errors that can occur while loading or validating mission catalogs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("mission '{0}' not found in catalog")]
    UnknownMission(String),
    #[error("mission '{mission}': {source}")]
    Epoch {
        mission: String,
        source: UtcParseError,
    },
    #[error("mission '{mission}': {source}")]
    Site {
        mission: String,
        source: SiteError,
    },
}

impl MissionConfig {
    /// Validate the record into the engine's immutable site parameters.
    pub fn site(&self) -> Result<SiteConfig, ConfigError> {
        let landing = parse_utc(&self.landing_date).map_err(|source| ConfigError::Epoch {
            mission: self.name.clone(),
            source,
        })?;
        let origin = parse_utc(&self.sol_origin).map_err(|source| ConfigError::Epoch {
            mission: self.name.clone(),
            source,
        })?;
        SiteConfig::new(landing, origin, self.sol_origin_ref, self.longitude, self.latitude)
            .map_err(|source| ConfigError::Site {
                mission: self.name.clone(),
                source,
            })
    }
}

/// Load mission records from a TOML file, a directory of TOML files, or a
/// YAML list.
pub fn load_missions<P: AsRef<Path>>(path: P) -> Result<Vec<MissionConfig>, ConfigError> {
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: MissionConfig = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// Case-insensitive mission lookup in a loaded catalog.
pub fn find_mission<'a>(
    missions: &'a [MissionConfig],
    name: &str,
) -> Result<&'a MissionConfig, ConfigError> {
    missions
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ConfigError::UnknownMission(name.to_string()))
}

fn read_dir_records(dir: &Path) -> Result<Vec<MissionConfig>, ConfigError> {
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        records.push(toml::from_str(&contents)?);
    }
    Ok(records)
}
