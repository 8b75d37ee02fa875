//! Configuration file support.
//!
//! ```toml
//! hemisphere = "southern"   # default: "northern"
//! date = "2026-01-15"       # optional; the system clock is used when absent
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    CalendarDate, Hemisphere, SeasonError,
    clock::{Clock, FixedClock, SeasonClock, SystemClock},
};

/// Settings for building a [`SeasonClock`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub hemisphere: Hemisphere,
    /// Pin reports to this date instead of reading the system clock.
    #[serde(default)]
    pub date:       Option<CalendarDate>,
}

/// The clock selected by a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfiguredClock {
    Fixed(FixedClock),
    System(SystemClock),
}

impl Clock for ConfiguredClock {
    fn today(&self) -> Result<CalendarDate, SeasonError> {
        match self {
            Self::Fixed(clock) => clock.today(),
            Self::System(clock) => clock.today(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    ///
    /// # Errors
    /// Returns `SeasonError::Config` if the text is not valid TOML or holds
    /// an unknown key, hemisphere or malformed date.
    pub fn from_toml_str(content: &str) -> Result<Self, SeasonError> {
        toml::from_str(content)
            .map_err(|e| SeasonError::Config(format!("Failed to parse config: {e}")))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns `SeasonError::Config` if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SeasonError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SeasonError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), hemisphere = %config.hemisphere, "loaded config");
        Ok(config)
    }

    pub const fn clock(&self) -> ConfiguredClock {
        match self.date {
            Some(date) => ConfiguredClock::Fixed(FixedClock(date)),
            None => ConfiguredClock::System(SystemClock),
        }
    }

    pub const fn season_clock(&self) -> SeasonClock<ConfiguredClock, Hemisphere> {
        SeasonClock::new(self.clock(), self.hemisphere)
    }
}
