//! Interactive solicitation of the raw values the booking engine decides
//! on. Each prompt loops until the corresponding validator accepts, so the
//! engine itself never sees a prompt and never re-prompts.

use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDate};
use reservation::{validate, validate_date, Error, Slot, MAX_PARTY_SIZE, MIN_ADVANCE_DAYS};

/// Print `message` and read one trimmed line from stdin.
pub fn read_line(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_string())
}

pub fn guest_name() -> io::Result<String> {
    loop {
        let raw = read_line("Enter the guest's name: ")?;
        match validate::guest_name(&raw) {
            Ok(name) => return Ok(name),
            Err(_) => println!(
                "Invalid name format! Please enter a valid name (alphabetic characters only)."
            ),
        }
    }
}

pub fn guest_email() -> io::Result<String> {
    loop {
        let raw = read_line("Enter the guest's email: ")?;
        match validate::guest_email(&raw) {
            Ok(email) => return Ok(email),
            Err(_) => println!("Invalid email format! Please enter a valid email address."),
        }
    }
}

pub fn guest_phone() -> io::Result<String> {
    loop {
        let raw = read_line("Enter the guest's phone number: ")?;
        match validate::guest_phone(&raw) {
            Ok(phone) => return Ok(phone),
            Err(_) => println!(
                "Invalid phone format! Please enter a valid phone number (10 digits)."
            ),
        }
    }
}

pub fn party_size() -> io::Result<u32> {
    loop {
        let raw = read_line("Enter the number of guests: ")?;
        match validate::party_size(&raw) {
            Ok(size) => return Ok(size),
            Err(Error::InvalidPartySize(_))
                if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) =>
            {
                println!(
                    "The restaurant seating accommodates a maximum of {MAX_PARTY_SIZE} guests in a single reservation."
                );
            }
            Err(_) => println!("Invalid number. Please enter a valid number."),
        }
    }
}

pub fn date() -> io::Result<NaiveDate> {
    loop {
        let raw = read_line("Enter the reservation date (YYYY-MM-DD): ")?;
        match validate_date(&raw, Local::now().naive_local()) {
            Ok(date) => return Ok(date),
            Err(Error::DateTooSoon(_)) => println!(
                "Reservations must be made at least {MIN_ADVANCE_DAYS} days in advance."
            ),
            Err(_) => {
                println!("Invalid date format. Please enter the date in the format YYYY-MM-DD.")
            }
        }
    }
}

pub fn slot() -> io::Result<Slot> {
    loop {
        println!("Our restaurant has {} sessions:", Slot::ALL.len());
        for slot in Slot::ALL {
            println!("{}: {}", slot.number(), slot.window());
        }
        let raw = read_line("Enter the session (1-4): ")?;
        match Slot::resolve(&raw) {
            Ok(slot) => return Ok(slot),
            Err(_) => println!("Invalid session. Please enter a session number between 1 and 4."),
        }
    }
}

pub fn confirm(message: &str) -> io::Result<bool> {
    let raw = read_line(message)?;
    Ok(raw.eq_ignore_ascii_case("y"))
}
