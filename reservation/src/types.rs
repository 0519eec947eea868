use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::{validate, Error};

/// Field count of a persisted reservation record.
pub const RECORD_FIELDS: usize = 6;

/// One of the four fixed service sessions offered each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Noon,
    Afternoon,
    Evening,
    Night,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Noon, Slot::Afternoon, Slot::Evening, Slot::Night];

    /// Resolve a menu selector ("1".."4") to its session.
    pub fn resolve(selector: &str) -> Result<Self, Error> {
        match selector.trim() {
            "1" => Ok(Slot::Noon),
            "2" => Ok(Slot::Afternoon),
            "3" => Ok(Slot::Evening),
            "4" => Ok(Slot::Night),
            other => Err(Error::InvalidSlot(other.to_string())),
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Slot::Noon => 1,
            Slot::Afternoon => 2,
            Slot::Evening => 3,
            Slot::Night => 4,
        }
    }

    /// Time window shown to guests.
    pub fn window(self) -> &'static str {
        match self {
            Slot::Noon => "12pm-2pm",
            Slot::Afternoon => "2pm-4pm",
            Slot::Evening => "6pm-8pm",
            Slot::Night => "8pm-10pm",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot {}", self.number())
    }
}

impl FromStr for Slot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Slot 1" => Ok(Slot::Noon),
            "Slot 2" => Ok(Slot::Afternoon),
            "Slot 3" => Ok(Slot::Evening),
            "Slot 4" => Ok(Slot::Night),
            other => Err(Error::InvalidSlot(other.to_string())),
        }
    }
}

/// A confirmed booking. Only constructible through [`Reservation::new`] or
/// [`Reservation::from_record`], both of which run the field validators, so
/// a value of this type always holds well-formed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub date: NaiveDate,
    pub slot: Slot,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub party_size: u32,
}

impl Reservation {
    /// Build a reservation from candidate field values. The contact fields
    /// go through the same validators the prompt layer uses, so a caller
    /// that skipped them still cannot construct a malformed booking.
    pub fn new(
        date: NaiveDate,
        slot: Slot,
        name: &str,
        email: &str,
        phone: &str,
        party_size: u32,
    ) -> Result<Self, Error> {
        Ok(Self {
            date,
            slot,
            name: validate::guest_name(name)?,
            email: validate::guest_email(email)?,
            phone: validate::guest_phone(phone)?,
            party_size: validate::check_party_size(party_size)?,
        })
    }

    /// The persisted shape: date, session label, name, email, phone, guests.
    pub fn to_record(&self) -> [String; RECORD_FIELDS] {
        [
            self.date.format("%Y-%m-%d").to_string(),
            self.slot.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.party_size.to_string(),
        ]
    }

    /// Rebuild a reservation from a persisted record, re-running the field
    /// validators. The advance-booking window is deliberately not
    /// re-applied: a booking that was valid when taken reloads as-is.
    pub fn from_record(fields: &[String]) -> Result<Self, Error> {
        if fields.len() < RECORD_FIELDS {
            return Err(Error::InvalidRecord(format!(
                "expected {} fields, got {}",
                RECORD_FIELDS,
                fields.len()
            )));
        }
        let date = NaiveDate::parse_from_str(fields[0].trim(), "%Y-%m-%d")
            .map_err(|_| Error::InvalidDate(fields[0].clone()))?;
        let slot = fields[1].parse()?;
        let party_size = fields[5]
            .trim()
            .parse()
            .map_err(|_| Error::InvalidPartySize(fields[5].clone()))?;
        Self::new(date, slot, &fields[2], &fields[3], &fields[4], party_size)
    }
}
