//! trattoria — the interactive reservation desk for Charming Thyme
//! Trattoria. All booking decisions live in the `reservation` crate; this
//! binary only prompts, dispatches, persists and logs.

use std::env;

use anyhow::Result;
use reservation::{Reservation, ReservationStore};
use tracing::{debug, error};
use trattoria_service::config::{Config, DEFAULT_CONFIG_PATH};
use trattoria_service::{menu, prompt, storage};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let config_path =
        env::var("TRATTORIA_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load(&config_path).unwrap_or_else(|err| {
        debug!(%config_path, %err, "config not loaded, using defaults");
        Config::default()
    });
    let data_path = config.data_path();
    let mut store = storage::load(&data_path);

    println!("\nWelcome to Charming Thyme Trattoria!");
    println!("Home of Exquisite Fine Dining\n");

    loop {
        print_main_menu();
        let choice = prompt::read_line("Enter your choice (a-f): ")?.to_lowercase();
        match choice.as_str() {
            "a" => {
                with_banner("add", || add_reservations(&mut store))?;
                save(&data_path, &store);
            }
            "b" => {
                with_banner("cancel", || cancel_reservations(&mut store))?;
                save(&data_path, &store);
            }
            "c" => {
                with_banner("update", || update_reservations(&mut store))?;
                save(&data_path, &store);
            }
            "d" => with_banner("view", || view_reservations(&store)),
            "e" => with_banner("recommend", || recommend_meal(&config.menu_path())),
            "f" => {
                save(&data_path, &store);
                println!("\nThank you for dining at Charming Thyme Trattoria!");
                println!("Have a wonderful day. Goodbye!\n");
                return Ok(());
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn print_main_menu() {
    let rule = "-".repeat(55);
    println!("{rule}");
    println!("Main Menu");
    println!("{rule}");
    println!("a) Add Reservation(s)");
    println!("b) Cancel Reservation(s)");
    println!("c) Edit Reservation(s)");
    println!("d) View All Reservations");
    println!("e) Surprise Me! - Generate Meal Recommendation");
    println!("f) Exit");
    println!("{rule}");
}

/// Wrap a front-desk operation with the separator banner and begin/end
/// trace events. The engine itself knows nothing about this.
fn with_banner<T>(op: &str, f: impl FnOnce() -> T) -> T {
    debug!(op, "begin");
    println!("{}", "=".repeat(100));
    let out = f();
    println!("{}", "=".repeat(100));
    debug!(op, "end");
    out
}

/// Persist the book. A write failure is reported but the in-memory state
/// stands; the next successful save catches it up.
fn save(path: &str, store: &ReservationStore) {
    match storage::save(path, store) {
        Ok(()) => println!("Data saved to file successfully!"),
        Err(err) => {
            error!(%err, "failed to persist reservations");
            println!("Error saving data to file: {err}");
        }
    }
}

fn add_reservations(store: &mut ReservationStore) -> Result<()> {
    while store.has_room() {
        let date = prompt::date()?;
        let slot = prompt::slot()?;
        if !store.slot_available(date, slot) {
            println!("The selected session is fully booked. Please choose a different session.");
            continue;
        }
        let name = prompt::guest_name()?;
        let email = prompt::guest_email()?;
        let phone = prompt::guest_phone()?;
        let party_size = prompt::party_size()?;
        match Reservation::new(date, slot, &name, &email, &phone, party_size)
            .and_then(|rsvp| store.create(rsvp))
        {
            Ok(()) => println!("Reservation added successfully!"),
            Err(err) => println!("Could not add the reservation: {err}"),
        }
        if !prompt::confirm("Do you want to add another reservation? (Y/N): ")? {
            return Ok(());
        }
    }
    println!("The reservation book is full.");
    Ok(())
}

fn cancel_reservations(store: &mut ReservationStore) -> Result<()> {
    loop {
        let name = prompt::read_line("Enter the guest's name to cancel the reservation: ")?;
        match store.cancel(&name) {
            Ok(removed) => {
                println!("Reservation canceled successfully! ({removed} booking(s) removed)")
            }
            Err(_) => println!("Reservation not found."),
        }
        if !prompt::confirm("Do you want to cancel another reservation? (Y/N): ")? {
            return Ok(());
        }
    }
}

fn update_reservations(store: &mut ReservationStore) -> Result<()> {
    loop {
        let name = prompt::read_line("Enter the guest's name to update the reservation: ")?;
        if store.has_booking(&name) {
            println!("Reservation found! Please provide the updated information.\n");
            let date = prompt::date()?;
            let slot = prompt::slot()?;
            let party_size = prompt::party_size()?;
            match store.update(&name, date, slot, party_size) {
                Ok(()) => println!("Reservation updated successfully!"),
                Err(err) => println!("Could not update the reservation: {err}"),
            }
        } else {
            println!("Reservation not found.");
        }
        if !prompt::confirm("Do you want to update another reservation? (Y/N): ")? {
            return Ok(());
        }
    }
}

fn view_reservations(store: &ReservationStore) {
    if store.is_empty() {
        println!("No reservations found.");
        return;
    }
    println!("Reservations:");
    println!(
        "{:<12} {:<10} {:<20} {:<30} {:<15} {:<12}",
        "Date", "Session", "Name", "Email", "Phone", "Guests"
    );
    for rsvp in store.iter() {
        println!(
            "{:<12} {:<10} {:<20} {:<30} {:<15} {:<12}",
            rsvp.date.to_string(),
            rsvp.slot.to_string(),
            rsvp.name,
            rsvp.email,
            rsvp.phone,
            rsvp.party_size
        );
    }
}

fn recommend_meal(path: &str) {
    match menu::recommend(path) {
        Ok(item) => println!("Random Meal Recommendation: {item}"),
        Err(err) => println!("{err}"),
    }
}
