//! Pure validators for the guest-supplied contact fields. Each takes the
//! raw string the front-end solicited and either hands back the normalized
//! value or says why it was refused; the retry loop lives with the caller.

use crate::Error;

pub const MIN_PARTY_SIZE: u32 = 1;
pub const MAX_PARTY_SIZE: u32 = 4;

/// Guest names are alphabetic-only and stored uppercase.
pub fn guest_name(s: &str) -> Result<String, Error> {
    let name = s.trim();
    if name.is_empty() || !name.chars().all(char::is_alphabetic) {
        return Err(Error::InvalidName(s.to_string()));
    }
    Ok(name.to_uppercase())
}

/// The only structural requirement on an email is a non-empty string
/// containing an `@`.
pub fn guest_email(s: &str) -> Result<String, Error> {
    let email = s.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(Error::InvalidEmail(s.to_string()));
    }
    Ok(email.to_string())
}

/// Phone numbers are exactly ten digits, nothing else.
pub fn guest_phone(s: &str) -> Result<String, Error> {
    let phone = s.trim();
    if phone.len() != 10 || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidPhone(s.to_string()));
    }
    Ok(phone.to_string())
}

/// Parse a party size and enforce the single-table limit.
pub fn party_size(s: &str) -> Result<u32, Error> {
    let raw = s.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidPartySize(s.to_string()));
    }
    let size = raw
        .parse()
        .map_err(|_| Error::InvalidPartySize(s.to_string()))?;
    check_party_size(size)
}

pub(crate) fn check_party_size(size: u32) -> Result<u32, Error> {
    if !(MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&size) {
        return Err(Error::InvalidPartySize(size.to_string()));
    }
    Ok(size)
}
