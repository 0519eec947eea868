//! Reservation engine for a single restaurant: field validation, the
//! advance-booking date policy, per-slot capacity accounting, and the
//! in-memory reservation book. Everything here is synchronous and pure of
//! I/O; prompting, persistence and logging belong to the front-end.

mod capacity;
mod error;
mod policy;
mod store;
mod types;
pub mod validate;

pub use capacity::{has_capacity, has_room_overall, slot_occupancy, MAX_RESERVATIONS, SLOT_CAPACITY};
pub use error::Error;
pub use policy::{validate_date, MIN_ADVANCE_DAYS};
pub use store::ReservationStore;
pub use types::{Reservation, Slot, RECORD_FIELDS};
pub use validate::{MAX_PARTY_SIZE, MIN_PARTY_SIZE};
