use crate::prelude::*;

/// English ordinal suffix for a day number: "st", "nd", "rd" or "th".
///
/// Meant for day-of-month and day-of-season sized numbers; 111 gets "st".
pub const fn ordinal_suffix(n: u32) -> &'static str {
    if n > 3 && n < 21 {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// A number displayed with its ordinal suffix, e.g. "21st"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, From)]
#[display(fmt = "{}{}", "_0", "ordinal_suffix(*_0)")]
pub struct Ordinal(pub u32);
