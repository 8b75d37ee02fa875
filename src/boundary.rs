use serde::Serialize;

use crate::{
    CalendarDate, Hemisphere, Season, SeasonError, prelude::*,
    season::{elapsed_days, season_close, season_of, season_start},
};

/// One occurrence of a season: its first and last day (both inclusive).
/// The start date is always less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{hemisphere} {season} {start}/{end}")]
pub struct SeasonBoundary {
    hemisphere: Hemisphere,
    season:     Season,
    start:      CalendarDate,
    end:        CalendarDate,
}

impl SeasonBoundary {
    /// The occurrence of `season` that most recently started on or before
    /// `reference`.
    ///
    /// # Errors
    /// Returns `SeasonError::YearOutOfRange` if either boundary falls outside
    /// years 1-9999.
    pub fn resolve(
        hemisphere: Hemisphere,
        season: Season,
        reference: CalendarDate,
    ) -> Result<Self, SeasonError> {
        let start = season_start(hemisphere, season, reference)?;
        let end = season_close(hemisphere, season, start)?;
        Ok(Self {
            hemisphere,
            season,
            start,
            end,
        })
    }

    /// The occurrence of whichever season `date` falls in
    ///
    /// # Errors
    /// Returns `SeasonError::YearOutOfRange` if either boundary falls outside
    /// years 1-9999.
    pub fn containing(hemisphere: Hemisphere, date: CalendarDate) -> Result<Self, SeasonError> {
        Self::resolve(hemisphere, season_of(hemisphere, date), date)
    }

    pub const fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    pub const fn season(&self) -> Season {
        self.season
    }

    /// First day of the season
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Last day of the season
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Day after the last day, i.e. the next season's first day.
    /// Returns `None` past 9999-12-31.
    pub fn end_exclusive(&self) -> Option<CalendarDate> {
        self.end.succ()
    }

    /// Number of days, counting both the first and the last day
    pub fn days(&self) -> u32 {
        elapsed_days(self.start, self.end) + 1
    }

    /// Checks if `date` falls within this occurrence
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// 1-based day number of `date` within the season, if it falls inside it
    pub fn day_of(&self, date: &CalendarDate) -> Option<u32> {
        self.contains(date)
            .then(|| elapsed_days(self.start, *date) + 1)
    }

    /// Days still to come after `date`, if it falls inside the season
    pub fn remaining_after(&self, date: &CalendarDate) -> Option<u32> {
        self.day_of(date).map(|day| self.days() - day)
    }

    /// The following season's occurrence, starting the day after this one ends
    ///
    /// # Errors
    /// Returns `SeasonError::YearOutOfRange` if it would start or end after 9999.
    pub fn next(&self) -> Result<Self, SeasonError> {
        let first = self
            .end_exclusive()
            .ok_or(SeasonError::YearOutOfRange {
                year: i32::from(self.end.year()) + 1,
            })?;
        Self::resolve(self.hemisphere, self.season.next(), first)
    }
}
