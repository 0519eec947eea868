use chrono::NaiveDate;

use crate::capacity::{has_capacity, has_room_overall};
use crate::{validate, Error, Reservation, Slot};

/// The ordered, in-memory reservation book for one session. The store owns
/// its records outright; callers observe them through [`iter`] snapshots
/// and mutate only through the operations below.
///
/// [`iter`]: ReservationStore::iter
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReservationStore {
    reservations: Vec<Reservation>,
}

impl ReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from persisted records. Records that no longer parse
    /// or would breach a capacity cap are discarded rather than failing the
    /// reload; callers can compare lengths to learn how many were dropped.
    pub fn from_records<I, R>(records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[String]>,
    {
        let mut store = Self::new();
        for record in records {
            if let Ok(rsvp) = Reservation::from_record(record.as_ref()) {
                let _ = store.create(rsvp);
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Whether another booking fits under the overall cap. Front-ends check
    /// this before soliciting input; [`create`](Self::create) re-checks
    /// regardless.
    pub fn has_room(&self) -> bool {
        has_room_overall(&self.reservations)
    }

    /// Whether `(date, slot)` still has a free table.
    pub fn slot_available(&self, date: NaiveDate, slot: Slot) -> bool {
        has_capacity(&self.reservations, date, slot, None)
    }

    /// Whether any booking is held under `name`, case-insensitively.
    pub fn has_booking(&self, name: &str) -> bool {
        let target = normalize(name);
        self.reservations.iter().any(|r| normalize(&r.name) == target)
    }

    /// Commit an already-validated booking, re-checking both capacity caps.
    pub fn create(&mut self, reservation: Reservation) -> Result<(), Error> {
        if !has_room_overall(&self.reservations) {
            return Err(Error::StoreFull);
        }
        if !has_capacity(&self.reservations, reservation.date, reservation.slot, None) {
            return Err(Error::SlotFull);
        }
        self.reservations.push(reservation);
        Ok(())
    }

    /// Cancel every booking held under `name`, case-insensitively, and
    /// return how many were removed. Multiple bookings under one name all
    /// go in a single call; that is the contract, not an accident.
    pub fn cancel(&mut self, name: &str) -> Result<usize, Error> {
        let target = normalize(name);
        let before = self.reservations.len();
        self.reservations.retain(|r| normalize(&r.name) != target);
        match before - self.reservations.len() {
            0 => Err(Error::NotFound),
            removed => Ok(removed),
        }
    }

    /// Move the first booking held under `name` to a new date, slot and
    /// party size. The booking being moved is excluded from the occupancy
    /// count of its destination, so shuffling within a full slot stays
    /// legal. Contact fields are never touched by an update.
    pub fn update(
        &mut self,
        name: &str,
        date: NaiveDate,
        slot: Slot,
        party_size: u32,
    ) -> Result<(), Error> {
        let party_size = validate::check_party_size(party_size)?;
        let target = normalize(name);
        let idx = self
            .reservations
            .iter()
            .position(|r| normalize(&r.name) == target)
            .ok_or(Error::NotFound)?;
        if !has_capacity(&self.reservations, date, slot, Some(idx)) {
            return Err(Error::SlotFull);
        }
        let rsvp = &mut self.reservations[idx];
        rsvp.date = date;
        rsvp.slot = slot;
        rsvp.party_size = party_size;
        Ok(())
    }

    /// Insertion-ordered snapshots of every booking.
    pub fn iter(&self) -> std::slice::Iter<'_, Reservation> {
        self.reservations.iter()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
