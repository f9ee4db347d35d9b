use jiff::civil::Date;
use jiff::{Timestamp, Zoned, tz};

/// The venue's time zone. Booking dates are calendar days in Prague.
pub const VENUE_TIME_ZONE: &str = "Europe/Prague";

fn venue_zone() -> tz::TimeZone {
    tz::TimeZone::get(VENUE_TIME_ZONE).unwrap_or_else(|_| tz::TimeZone::system())
}

/// Today at the venue, used to grey out past days in the calendar.
pub fn venue_today() -> Date {
    Zoned::now().with_time_zone(venue_zone()).date()
}

/// Localize a timestamp to the venue time zone
pub fn localize_timestamp(timestamp: Timestamp) -> Zoned {
    timestamp.to_zoned(venue_zone())
}

/// Czech numeric date, e.g. "5. 1. 2025".
pub fn format_date(date: Date) -> String {
    date.strftime("%-d. %-m. %Y").to_string()
}

pub fn format_timestamp(timestamp: Timestamp) -> String {
    localize_timestamp(timestamp)
        .strftime("%-d. %-m. %Y %H:%M")
        .to_string()
}
