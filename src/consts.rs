/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

// Northern-hemisphere onsets as (month, day). Southern seasons use the
// opposite season's dates.

/// First day of northern Spring
pub const MARCH_EQUINOX: (u8, u8) = (3, 20);
/// First day of northern Summer
pub const JUNE_SOLSTICE: (u8, u8) = (6, 21);
/// First day of northern Autumn
pub const SEPTEMBER_EQUINOX: (u8, u8) = (9, 23);
/// First day of northern Winter
pub const DECEMBER_SOLSTICE: (u8, u8) = (12, 21);

/// Shortest possible season, in days (Autumn, or Winter in a common year)
pub const MIN_SEASON_DAYS: u32 = 89;
/// Longest possible season, in days (Summer)
pub const MAX_SEASON_DAYS: u32 = 94;

pub const SPRING_ICON: &str = "\u{1F338}";
pub const SUMMER_ICON: &str = "\u{2600}\u{FE0F}";
pub const AUTUMN_ICON: &str = "\u{1F342}";
pub const WINTER_ICON: &str = "\u{2744}\u{FE0F}";
