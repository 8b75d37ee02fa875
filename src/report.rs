use serde::Serialize;
use tracing::debug;

use crate::{
    CalendarDate, Hemisphere, Ordinal, Season, SeasonBoundary, SeasonError, day_of_season,
};

/// Everything a display needs to show where a date sits in its season.
///
/// Produced by [`SeasonReport::for_date`]; rendering it is up to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonReport {
    date:             CalendarDate,
    hemisphere:       Hemisphere,
    season:           Season,
    season_start:     CalendarDate,
    season_end:       CalendarDate,
    day_of_season:    u32,
    days_in_season:   u32,
    days_remaining:   u32,
    progress_percent: f64,
    icon:             &'static str,
    formatted_date:   String,
}

impl SeasonReport {
    /// Builds the report for `date` as seen from `hemisphere`
    ///
    /// # Errors
    /// Returns `SeasonError::YearOutOfRange` if the season containing `date`
    /// starts or ends outside years 1-9999.
    pub fn for_date(hemisphere: Hemisphere, date: CalendarDate) -> Result<Self, SeasonError> {
        let boundary = SeasonBoundary::containing(hemisphere, date)?;
        let season = boundary.season();
        let day = day_of_season(hemisphere, season, date)?;
        let days = boundary.days();

        let report = Self {
            date,
            hemisphere,
            season,
            season_start: boundary.start(),
            season_end: boundary.end(),
            day_of_season: day,
            days_in_season: days,
            days_remaining: days.saturating_sub(day),
            progress_percent: f64::from(day) / f64::from(days) * 100.0,
            icon: season.icon(),
            formatted_date: date.long_format(),
        };
        debug!(%date, %hemisphere, %season, day, days, "built season report");
        Ok(report)
    }

    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    pub const fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    pub const fn season(&self) -> Season {
        self.season
    }

    pub const fn season_start(&self) -> CalendarDate {
        self.season_start
    }

    pub const fn season_end(&self) -> CalendarDate {
        self.season_end
    }

    /// 1-based day within the season
    pub const fn day_of_season(&self) -> u32 {
        self.day_of_season
    }

    pub const fn days_in_season(&self) -> u32 {
        self.days_in_season
    }

    /// Days left after today
    pub const fn days_remaining(&self) -> u32 {
        self.days_remaining
    }

    /// Share of the season reached, today included, in `(0, 100]`
    pub const fn progress_percent(&self) -> f64 {
        self.progress_percent
    }

    pub const fn icon(&self) -> &'static str {
        self.icon
    }

    /// Date in English long form, e.g. "Thursday, January 15, 2026"
    pub fn formatted_date(&self) -> &str {
        &self.formatted_date
    }

    /// Progress rounded to the nearest whole percent
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn progress_rounded(&self) -> u32 {
        self.progress_percent.round() as u32
    }

    /// e.g. "45% of Summer complete"
    pub fn progress_label(&self) -> String {
        format!("{}% of {} complete", self.progress_rounded(), self.season)
    }

    /// e.g. "42nd day of Summer"
    pub fn day_label(&self) -> String {
        format!("{} day of {}", Ordinal(self.day_of_season), self.season)
    }
}
