use std::fs;

use anyhow::{bail, Context, Result};
use rand::seq::SliceRandom;

/// Pick one dish at random from the menu-items file, one dish per line.
/// Reservation state is never consulted.
pub fn recommend(path: &str) -> Result<String> {
    let content =
        fs::read_to_string(path).with_context(|| format!("menu items file not found: {path}"))?;
    let items: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    match items.choose(&mut rand::thread_rng()) {
        Some(item) => Ok((*item).to_string()),
        None => bail!("menu items file is empty: {path}"),
    }
}
