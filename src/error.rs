//! Crate-level error type.

use crate::ParseError;

/// Error type for season calculations and their adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeasonError {
    /// A season boundary would fall outside the supported years.
    #[error("season boundary falls in year {year}, outside the supported range 1-9999")]
    YearOutOfRange { year: i32 },

    /// Error parsing a date, hemisphere or season.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Configuration could not be read or parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The system clock could not be turned into a calendar date.
    #[error("Clock unavailable: {0}")]
    Clock(String),
}
