use chrono::NaiveDate;
use thiserror::Error;

/// Every failure the booking engine can report. All of these are
/// recoverable by retrying with different input; none aborts the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid guest name: {0:?}")]
    InvalidName(String),

    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("invalid phone number: {0:?}")]
    InvalidPhone(String),

    #[error("invalid party size: {0:?}")]
    InvalidPartySize(String),

    #[error("invalid reservation date: {0:?}")]
    InvalidDate(String),

    #[error("reservation date {0} is not far enough in advance")]
    DateTooSoon(NaiveDate),

    #[error("invalid session selector: {0:?}")]
    InvalidSlot(String),

    #[error("malformed reservation record: {0}")]
    InvalidRecord(String),

    #[error("the selected session is fully booked")]
    SlotFull,

    #[error("the reservation book is full")]
    StoreFull,

    #[error("reservation not found")]
    NotFound,
}
