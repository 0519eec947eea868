//! Occupancy accounting over the live reservation set. Linear scans are
//! fine here: the book never holds more than [`MAX_RESERVATIONS`] entries.

use chrono::NaiveDate;

use crate::{Reservation, Slot};

/// Hard cap on bookings held at once.
pub const MAX_RESERVATIONS: usize = 32;

/// Bookings allowed per (date, slot) pair.
pub const SLOT_CAPACITY: usize = 8;

/// Count the bookings holding `(date, slot)`. `exclude` skips one index so
/// an update does not count the booking being moved against its own
/// destination.
pub fn slot_occupancy(
    reservations: &[Reservation],
    date: NaiveDate,
    slot: Slot,
    exclude: Option<usize>,
) -> usize {
    reservations
        .iter()
        .enumerate()
        .filter(|(idx, r)| Some(*idx) != exclude && r.date == date && r.slot == slot)
        .count()
}

pub fn has_capacity(
    reservations: &[Reservation],
    date: NaiveDate,
    slot: Slot,
    exclude: Option<usize>,
) -> bool {
    slot_occupancy(reservations, date, slot, exclude) < SLOT_CAPACITY
}

pub fn has_room_overall(reservations: &[Reservation]) -> bool {
    reservations.len() < MAX_RESERVATIONS
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2099, 6, d).unwrap()
    }

    fn booking(d: u32, slot: Slot, name: &str) -> Reservation {
        Reservation::new(date(d), slot, name, "guest@example.com", "5551234567", 2).unwrap()
    }

    #[test]
    fn occupancy_counts_only_the_matching_pair() {
        let reservations = vec![
            booking(1, Slot::Noon, "alice"),
            booking(1, Slot::Noon, "bob"),
            booking(1, Slot::Evening, "carol"),
            booking(2, Slot::Noon, "dave"),
        ];
        assert_eq!(slot_occupancy(&reservations, date(1), Slot::Noon, None), 2);
        assert_eq!(slot_occupancy(&reservations, date(1), Slot::Evening, None), 1);
        assert_eq!(slot_occupancy(&reservations, date(2), Slot::Evening, None), 0);
    }

    #[test]
    fn exclude_skips_exactly_one_booking() {
        let reservations = vec![
            booking(1, Slot::Noon, "alice"),
            booking(1, Slot::Noon, "bob"),
        ];
        assert_eq!(
            slot_occupancy(&reservations, date(1), Slot::Noon, Some(0)),
            1
        );
        assert_eq!(
            slot_occupancy(&reservations, date(1), Slot::Noon, Some(5)),
            2
        );
    }

    #[test]
    fn capacity_flips_at_the_slot_cap() {
        let mut reservations = Vec::new();
        for _ in 0..SLOT_CAPACITY - 1 {
            reservations.push(booking(1, Slot::Noon, "guest"));
        }
        assert!(has_capacity(&reservations, date(1), Slot::Noon, None));
        reservations.push(booking(1, Slot::Noon, "guest"));
        assert!(!has_capacity(&reservations, date(1), Slot::Noon, None));
        // a different date in the same slot is unaffected
        assert!(has_capacity(&reservations, date(2), Slot::Noon, None));
    }

    #[test]
    fn overall_room_flips_at_the_store_cap() {
        let mut reservations = Vec::new();
        for day in 0..MAX_RESERVATIONS - 1 {
            reservations.push(booking(1 + (day as u32 % 28), Slot::Noon, "guest"));
        }
        assert!(has_room_overall(&reservations));
        reservations.push(booking(1, Slot::Evening, "guest"));
        assert!(!has_room_overall(&reservations));
    }
}
