use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::Error;

/// Bookings must be placed at least this many days ahead of the clock.
pub const MIN_ADVANCE_DAYS: i64 = 5;

/// Parse a candidate `YYYY-MM-DD` date and enforce the advance-booking
/// window. The clock is passed in by the caller, which keeps the rule
/// deterministic under test; interactive callers hand in `Local::now()`.
pub fn validate_date(s: &str, now: NaiveDateTime) -> Result<NaiveDate, Error> {
    let raw = s.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(raw.to_string()))?;
    let cutoff = now + Duration::days(MIN_ADVANCE_DAYS);
    if date.and_time(NaiveTime::MIN) < cutoff {
        return Err(Error::DateTooSoon(date));
    }
    Ok(date)
}
