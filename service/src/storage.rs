//! Flat-file persistence for the reservation book: one pipe-delimited
//! record per booking, rewritten in full after every mutating operation.
//! The core stays agnostic to this encoding; only the 6-field record shape
//! is shared.

use std::fs::File;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use reservation::ReservationStore;
use tracing::{info, warn};

const DELIMITER: u8 = b'|';

/// Load the reservation book from `path`. A missing file starts an empty
/// book, and rows that fail to parse are dropped rather than failing the
/// session start.
pub fn load(path: &str) -> ReservationStore {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            info!(path, %err, "reservation file not opened, starting empty");
            return ReservationStore::new();
        }
    };
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records: Vec<Vec<String>> = Vec::new();
    let mut skipped = 0usize;
    for row in reader.records() {
        match row {
            Ok(row) => records.push(row.iter().map(str::to_string).collect()),
            Err(_) => skipped += 1,
        }
    }
    let total = records.len();
    let store = ReservationStore::from_records(records);
    skipped += total - store.len();
    if skipped > 0 {
        warn!(path, skipped, "dropped unusable reservation records");
    }
    store
}

/// Rewrite the whole reservation file from the store's current contents.
pub fn save(path: &str, store: &ReservationStore) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_path(path)
        .with_context(|| format!("failed to open reservation file {path} for writing"))?;
    for rsvp in store.iter() {
        writer
            .write_record(rsvp.to_record())
            .with_context(|| format!("failed to write reservation record to {path}"))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush reservation file {path}"))?;
    Ok(())
}
