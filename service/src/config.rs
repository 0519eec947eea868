use std::fs;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "trattoria.yml";

/// Front-desk configuration, loaded from YAML. Paths may use `~`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub menu: MenuConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    pub path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                path: "reservations.txt".to_string(),
            },
            menu: MenuConfig {
                path: "menu_items.txt".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(filename: &str) -> Result<Self> {
        let path = shellexpand::tilde(filename).into_owned();
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {path}"))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file {path}"))
    }

    /// Reservation file path with `~` expanded.
    pub fn data_path(&self) -> String {
        shellexpand::tilde(&self.storage.path).into_owned()
    }

    /// Menu-items file path with `~` expanded.
    pub fn menu_path(&self) -> String {
        shellexpand::tilde(&self.menu.path).into_owned()
    }
}
