use std::fs;

use chrono::NaiveDate;
use reservation::{Reservation, ReservationStore, Slot};
use tempfile::tempdir;
use trattoria_service::config::Config;
use trattoria_service::{menu, storage};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_store() -> ReservationStore {
    let mut store = ReservationStore::new();
    let guests = [
        ("Alice", "alice@example.com", "5550000001", 2, Slot::Noon),
        ("Bob", "bob@example.com", "5550000002", 4, Slot::Noon),
        ("Carol", "carol@example.com", "5550000003", 1, Slot::Night),
    ];
    for (name, email, phone, party, slot) in guests {
        let rsvp = Reservation::new(date(2099, 6, 1), slot, name, email, phone, party).unwrap();
        store.create(rsvp).unwrap();
    }
    store
}

#[test]
fn save_then_load_should_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("reservations.txt");
    let path = path.to_str().unwrap();

    let store = sample_store();
    storage::save(path, &store).unwrap();
    let reloaded = storage::load(path);

    assert_eq!(reloaded, store);
    let names: Vec<_> = reloaded.iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, vec!["ALICE", "BOB", "CAROL"]);
}

#[test]
fn load_should_skip_malformed_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("reservations.txt");
    fs::write(
        &path,
        concat!(
            "2099-06-01|Slot 1|ALICE|alice@example.com|5550000001|2\n",
            "2099-06-02|Slot 2\n",
            "not-a-date|Slot 1|BOB|bob@example.com|5550000002|2\n",
            "2099-06-03|Slot 9|CAROL|carol@example.com|5550000003|3\n",
            "2099-06-04|Slot 1|DAVE|dave.example.com|5550000004|2\n",
            "2099-06-05|Slot 1|ERIN|erin@example.com|555|2\n",
            "2099-06-06|Slot 1|FAY|fay@example.com|5550000006|7\n",
        ),
    )
    .unwrap();

    let store = storage::load(path.to_str().unwrap());
    assert_eq!(store.len(), 1);
    let only = store.iter().next().unwrap();
    assert_eq!(only.name, "ALICE");
    assert_eq!(only.slot, Slot::Noon);
    assert_eq!(only.date, date(2099, 6, 1));
}

#[test]
fn load_missing_file_should_start_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nothing-here.txt");
    let store = storage::load(path.to_str().unwrap());
    assert!(store.is_empty());
}

#[test]
fn save_should_overwrite_previous_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("reservations.txt");
    let path = path.to_str().unwrap();

    storage::save(path, &sample_store()).unwrap();
    let mut smaller = ReservationStore::new();
    smaller
        .create(
            Reservation::new(
                date(2099, 7, 1),
                Slot::Evening,
                "Zoe",
                "zoe@example.com",
                "5550000009",
                2,
            )
            .unwrap(),
        )
        .unwrap();
    storage::save(path, &smaller).unwrap();

    let reloaded = storage::load(path);
    assert_eq!(reloaded, smaller);
}

#[test]
fn config_should_load_from_fixture() {
    let config = Config::load("fixtures/config.yml").unwrap();
    assert_eq!(config.storage.path, "fixtures/reservations.txt");
    assert_eq!(config.menu.path, "fixtures/menu_items.txt");
}

#[test]
fn missing_config_should_fail_and_default_should_stand_in() {
    assert!(Config::load("fixtures/no-such-config.yml").is_err());
    let config = Config::default();
    assert_eq!(config.data_path(), "reservations.txt");
    assert_eq!(config.menu_path(), "menu_items.txt");
}

#[test]
fn recommendation_should_come_from_the_menu_file() {
    let item = menu::recommend("fixtures/menu_items.txt").unwrap();
    let content = fs::read_to_string("fixtures/menu_items.txt").unwrap();
    assert!(content.lines().any(|line| line.trim() == item));
}

#[test]
fn recommendation_should_fail_without_a_menu_file() {
    assert!(menu::recommend("fixtures/no-such-menu.txt").is_err());
}
