//! Which time slots can be booked on a given day.
//!
//! The policy is a fixed daily schedule minus a fixed set of busy slots. It
//! does not consult any reservation ledger, so the result is the same for
//! every date and double booking is not prevented.

use jiff::civil::{Date, Time, Weekday, time};

/// Cosmetic classification of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayMarker {
    Regular,
    /// Highlighted in the calendar. Selection is not blocked.
    Sunday,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityPolicy {
    schedule: Vec<Time>,
    busy: Vec<Time>,
}

impl AvailabilityPolicy {
    pub fn new(schedule: Vec<Time>, busy: Vec<Time>) -> Self {
        Self { schedule, busy }
    }

    /// Hourly slots from 09:00 to 18:00 with 10:00, 14:00 and 16:00 taken.
    pub fn standard() -> Self {
        Self::new(
            (9..=18).map(|hour| time(hour, 0, 0, 0)).collect(),
            vec![time(10, 0, 0, 0), time(14, 0, 0, 0), time(16, 0, 0, 0)],
        )
    }

    pub fn schedule(&self) -> &[Time] {
        &self.schedule
    }

    /// Slots that can be booked on `date`, in schedule order.
    pub fn available_times(&self, _date: Date) -> Vec<Time> {
        self.schedule
            .iter()
            .filter(|slot| !self.busy.contains(slot))
            .copied()
            .collect()
    }

    /// [`Self::available_times`] formatted as `HH:MM` labels.
    pub fn available_slots(&self, date: Date) -> Vec<String> {
        self.available_times(date)
            .into_iter()
            .map(format_slot)
            .collect()
    }

    pub fn is_available(&self, date: Date, slot: &str) -> bool {
        parse_slot(slot)
            .is_some_and(|slot| self.available_times(date).contains(&slot))
    }
}

impl Default for AvailabilityPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn day_marker(date: Date) -> DayMarker {
    if date.weekday() == Weekday::Sunday {
        DayMarker::Sunday
    } else {
        DayMarker::Regular
    }
}

/// Days up to and including today are disabled in the calendar.
pub fn is_selectable(date: Date, today: Date) -> bool {
    date > today
}

pub fn format_slot(slot: Time) -> String {
    slot.strftime("%H:%M").to_string()
}

pub fn parse_slot(slot: &str) -> Option<Time> {
    Time::strptime("%H:%M", slot).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    const EXPECTED: [&str; 7] =
        ["09:00", "11:00", "12:00", "13:00", "15:00", "17:00", "18:00"];

    #[test]
    fn slots_are_schedule_minus_busy_regardless_of_date() {
        let policy = AvailabilityPolicy::standard();
        let mut day = date(2025, 1, 1);
        for _ in 0..400 {
            assert_eq!(policy.available_slots(day), EXPECTED);
            day = day.tomorrow().unwrap();
        }
    }

    #[test]
    fn busy_slots_are_not_available() {
        let policy = AvailabilityPolicy::standard();
        let day = date(2025, 3, 5);
        assert!(policy.is_available(day, "09:00"));
        assert!(!policy.is_available(day, "10:00"));
        assert!(!policy.is_available(day, "19:00"));
        assert!(!policy.is_available(day, "nonsense"));
    }

    #[test]
    fn sunday_is_marked_but_still_bookable() {
        let policy = AvailabilityPolicy::standard();
        let sunday = date(2025, 1, 5);
        assert_eq!(day_marker(sunday), DayMarker::Sunday);
        assert_eq!(day_marker(date(2025, 1, 6)), DayMarker::Regular);
        assert_eq!(policy.available_slots(sunday).len(), EXPECTED.len());
    }

    #[test]
    fn earliest_selectable_day_is_tomorrow() {
        let today = date(2025, 1, 1);
        assert!(!is_selectable(date(2024, 12, 31), today));
        assert!(!is_selectable(today, today));
        assert!(is_selectable(date(2025, 1, 2), today));
    }

    #[test]
    fn custom_policy_is_respected() {
        let policy = AvailabilityPolicy::new(
            vec![time(8, 30, 0, 0), time(9, 30, 0, 0)],
            vec![time(9, 30, 0, 0)],
        );
        assert_eq!(policy.available_slots(date(2025, 1, 1)), vec!["08:30"]);
    }
}
