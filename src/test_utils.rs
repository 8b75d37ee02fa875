use crate::CalendarDate;

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap_or_else(|e| panic!("invalid test date {year}-{month}-{day}: {e}"))
}

/// Every date of `year`, in order
pub fn every_day_of(year: u16) -> Vec<CalendarDate> {
    let mut days = Vec::with_capacity(366);
    let mut current = Some(date(year, 1, 1));
    while let Some(d) = current.filter(|d| d.year() == year) {
        days.push(d);
        current = d.succ();
    }
    days
}
