use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    AUTUMN_ICON, CalendarDate, DECEMBER_SOLSTICE, JUNE_SOLSTICE, MARCH_EQUINOX, ParseError,
    SEPTEMBER_EQUINOX, SPRING_ICON, SUMMER_ICON, SeasonBoundary, SeasonError, WINTER_ICON,
    prelude::*,
};

/// Half of the Earth, which decides which months belong to which season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    #[default]
    #[display(fmt = "northern")]
    Northern,
    #[display(fmt = "southern")]
    Southern,
}

impl Hemisphere {
    /// Human-readable name, e.g. "Northern Hemisphere"
    pub const fn label(self) -> &'static str {
        match self {
            Self::Northern => "Northern Hemisphere",
            Self::Southern => "Southern Hemisphere",
        }
    }
}

impl FromStr for Hemisphere {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "northern" => Ok(Self::Northern),
            "southern" => Ok(Self::Southern),
            _ => Err(ParseError::UnknownHemisphere(s.to_owned())),
        }
    }
}

/// One of the four meteorological seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Season {
    #[display(fmt = "Spring")]
    Spring,
    #[display(fmt = "Summer")]
    Summer,
    #[display(fmt = "Autumn")]
    Autumn,
    #[display(fmt = "Winter")]
    Winter,
}

impl Season {
    /// All seasons in the order they occur
    pub const ALL: [Self; 4] = [Self::Spring, Self::Summer, Self::Autumn, Self::Winter];

    /// The season on the other side of the equator at the same time
    pub const fn opposite(self) -> Self {
        match self {
            Self::Spring => Self::Autumn,
            Self::Summer => Self::Winter,
            Self::Autumn => Self::Spring,
            Self::Winter => Self::Summer,
        }
    }

    /// The season that follows this one
    pub const fn next(self) -> Self {
        match self {
            Self::Spring => Self::Summer,
            Self::Summer => Self::Autumn,
            Self::Autumn => Self::Winter,
            Self::Winter => Self::Spring,
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Spring => SPRING_ICON,
            Self::Summer => SUMMER_ICON,
            Self::Autumn => AUTUMN_ICON,
            Self::Winter => WINTER_ICON,
        }
    }

    /// `(month, day)` of the first day of this season
    pub const fn onset(self, hemisphere: Hemisphere) -> (u8, u8) {
        match self.as_northern(hemisphere) {
            Self::Spring => MARCH_EQUINOX,
            Self::Summer => JUNE_SOLSTICE,
            Self::Autumn => SEPTEMBER_EQUINOX,
            Self::Winter => DECEMBER_SOLSTICE,
        }
    }

    /// `(month, day)` of the last day of this season
    pub const fn close(self, hemisphere: Hemisphere) -> (u8, u8) {
        // Every onset falls after the 1st, so the day before is in the same month.
        let (month, day) = self.next().onset(hemisphere);
        (month, day - 1)
    }

    /// The northern season sharing this season's dates
    const fn as_northern(self, hemisphere: Hemisphere) -> Self {
        match hemisphere {
            Hemisphere::Northern => self,
            Hemisphere::Southern => self.opposite(),
        }
    }
}

impl FromStr for Season {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "autumn" => Ok(Self::Autumn),
            "winter" => Ok(Self::Winter),
            _ => Err(ParseError::UnknownSeason(s.to_owned())),
        }
    }
}

/// The season `date` falls in.
///
/// Northern thresholds: Spring from March 20th, Summer from June 21st,
/// Autumn from September 23rd, Winter from December 21st. The southern
/// hemisphere has the opposite season on every date.
pub fn season_of(hemisphere: Hemisphere, date: CalendarDate) -> Season {
    let md = date.month_day();
    let northern = if md >= DECEMBER_SOLSTICE || md < MARCH_EQUINOX {
        Season::Winter
    } else if md >= SEPTEMBER_EQUINOX {
        Season::Autumn
    } else if md >= JUNE_SOLSTICE {
        Season::Summer
    } else {
        Season::Spring
    };
    northern.as_northern(hemisphere)
}

/// First day of the most recent occurrence of `season` that started on or
/// before `reference`.
///
/// # Errors
/// Returns `SeasonError::YearOutOfRange` if that day would be before year 1.
pub fn season_start(
    hemisphere: Hemisphere,
    season: Season,
    reference: CalendarDate,
) -> Result<CalendarDate, SeasonError> {
    let year = i32::from(reference.year());
    let onset = season.onset(hemisphere);
    let candidate = on(year, onset)?;
    if candidate <= reference {
        return Ok(candidate);
    }

    trace!(%hemisphere, %season, %reference, "season onset is later this year, using previous year");
    on(year - 1, onset)
}

/// Last day (inclusive) of the occurrence of `season` returned by
/// [`season_start`] for the same arguments.
///
/// # Errors
/// Returns `SeasonError::YearOutOfRange` if either boundary falls outside
/// years 1-9999.
pub fn season_end(
    hemisphere: Hemisphere,
    season: Season,
    reference: CalendarDate,
) -> Result<CalendarDate, SeasonError> {
    let start = season_start(hemisphere, season, reference)?;
    season_close(hemisphere, season, start)
}

/// Number of days in the occurrence of `season` around `reference`, counting
/// both its first and last day.
///
/// # Errors
/// Returns `SeasonError::YearOutOfRange` if either boundary falls outside
/// years 1-9999.
pub fn days_in_season(
    hemisphere: Hemisphere,
    season: Season,
    reference: CalendarDate,
) -> Result<u32, SeasonError> {
    SeasonBoundary::resolve(hemisphere, season, reference).map(|boundary| boundary.days())
}

/// 1-based position of `reference` in the occurrence of `season` that started
/// on or before it. The first day of a season is day 1.
///
/// # Errors
/// Returns `SeasonError::YearOutOfRange` if the season start would be before
/// year 1.
pub fn day_of_season(
    hemisphere: Hemisphere,
    season: Season,
    reference: CalendarDate,
) -> Result<u32, SeasonError> {
    let start = season_start(hemisphere, season, reference)?;
    Ok(elapsed_days(start, reference) + 1)
}

/// Display symbol for `season`
pub const fn season_icon(season: Season) -> &'static str {
    season.icon()
}

/// Last day of the occurrence of `season` that begins on `start`.
pub(crate) fn season_close(
    hemisphere: Hemisphere,
    season: Season,
    start: CalendarDate,
) -> Result<CalendarDate, SeasonError> {
    let year = i32::from(start.year());
    let close = season.close(hemisphere);
    let candidate = on(year, close)?;
    if candidate >= start {
        return Ok(candidate);
    }

    trace!(%hemisphere, %season, %start, "season closes in the following year");
    on(year + 1, close)
}

/// Whole days from `from` to a date no earlier than it and within a year of it.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn elapsed_days(from: CalendarDate, to: CalendarDate) -> u32 {
    debug_assert!(from <= to);
    from.days_until(&to) as u32
}

fn on(year: i32, (month, day): (u8, u8)) -> Result<CalendarDate, SeasonError> {
    u16::try_from(year)
        .ok()
        .and_then(|y| CalendarDate::new(y, month, day).ok())
        .ok_or(SeasonError::YearOutOfRange { year })
}
