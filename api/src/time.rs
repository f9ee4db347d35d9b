use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;
#[cfg(feature = "mock-time")]
use std::sync::{Arc, Mutex};

/// Time zone of the venue. "Today" for booking purposes is a Prague date.
pub const VENUE_TIME_ZONE: &str = "Europe/Prague";

/// Clock used by every handler. With `mock-time` enabled the clock only moves
/// when told to, which keeps tests independent of the wall clock.
#[derive(Clone)]
pub struct TimeSource {
    #[cfg(feature = "mock-time")]
    time: Arc<Mutex<Timestamp>>,
}

impl TimeSource {
    #[allow(clippy::new_without_default)]
    #[cfg(not(feature = "mock-time"))]
    pub fn new() -> Self {
        Self {}
    }

    #[cfg(feature = "mock-time")]
    pub fn new(initial_time: Timestamp) -> Self {
        Self {
            time: Arc::new(Mutex::new(initial_time)),
        }
    }

    #[cfg(not(feature = "mock-time"))]
    pub fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    #[cfg(feature = "mock-time")]
    pub fn now(&self) -> Timestamp {
        *self.lock()
    }

    /// Current calendar date at the venue.
    pub fn today(&self) -> Date {
        let tz = TimeZone::get(VENUE_TIME_ZONE).unwrap_or(TimeZone::UTC);
        self.now().to_zoned(tz).date()
    }

    #[cfg(feature = "mock-time")]
    pub fn advance(&self, duration: jiff::Span) {
        let mut time = self.lock();
        *time += duration;
    }

    #[cfg(feature = "mock-time")]
    pub fn set(&self, time: Timestamp) {
        *self.lock() = time;
    }

    #[cfg(feature = "mock-time")]
    fn lock(&self) -> std::sync::MutexGuard<'_, Timestamp> {
        // a poisoned clock still holds a valid timestamp
        self.time.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(all(test, feature = "mock-time"))]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn today_uses_venue_time_zone() {
        // 23:30 UTC on New Year's Eve is already January 1st in Prague
        let time_source =
            TimeSource::new("2024-12-31T23:30:00Z".parse().unwrap());
        assert_eq!(time_source.today(), date(2025, 1, 1));

        time_source.advance(jiff::Span::new().hours(24));
        assert_eq!(time_source.today(), date(2025, 1, 2));
    }
}
