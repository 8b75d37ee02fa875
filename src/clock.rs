//! Adapters between the pure calculator and the environment.
//!
//! The calculator never reads the wall clock or guesses a hemisphere. A
//! [`SeasonClock`] pairs a [`Clock`] with a [`HemisphereSource`] and reads
//! both exactly once per report.

use chrono::Utc;
use tracing::debug;

use crate::{CalendarDate, Hemisphere, SeasonError, SeasonReport};

/// Supplies the current date.
pub trait Clock {
    /// Today's date
    ///
    /// # Errors
    /// Returns `SeasonError::Clock` if the underlying time source cannot
    /// produce a calendar date.
    fn today(&self) -> Result<CalendarDate, SeasonError>;
}

/// Decides which hemisphere the user is in.
///
/// Implementations must always answer; fall back to a fixed hemisphere
/// rather than failing.
pub trait HemisphereSource {
    fn hemisphere(&self) -> Hemisphere;
}

impl HemisphereSource for Hemisphere {
    fn hemisphere(&self) -> Hemisphere {
        *self
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> Result<CalendarDate, SeasonError> {
        Ok(self.0)
    }
}

/// The system clock, read as a UTC date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Result<CalendarDate, SeasonError> {
        let today = CalendarDate::try_from(Utc::now().date_naive())?;
        debug!(%today, "read system clock");
        Ok(today)
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> Result<CalendarDate, SeasonError> {
        (**self).today()
    }
}

/// Produces reports for "today" from a clock and a hemisphere source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonClock<C, H> {
    clock:      C,
    hemisphere: H,
}

impl<C: Clock, H: HemisphereSource> SeasonClock<C, H> {
    pub const fn new(clock: C, hemisphere: H) -> Self {
        Self { clock, hemisphere }
    }

    /// Report for the clock's current date
    ///
    /// # Errors
    /// Returns the clock's error, or `SeasonError::YearOutOfRange` at the
    /// edges of the supported calendar.
    pub fn report(&self) -> Result<SeasonReport, SeasonError> {
        let today = self.clock.today()?;
        SeasonReport::for_date(self.hemisphere.hemisphere(), today)
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    pub const fn hemisphere_source(&self) -> &H {
        &self.hemisphere
    }
}
