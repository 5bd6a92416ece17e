//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shopfloor.toml", ".shopfloor.toml", "shopfloor.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Store configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl ShopConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

/// Where and how the store is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON store file.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Fill an empty catalog with sample products on startup.
    #[serde(default = "default_true")]
    pub seed_samples: bool,
}

fn default_data_file() -> String {
    "store_data.json".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            seed_samples: true,
        }
    }
}

/// How amounts are shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Label printed after every amount.
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    "Toman".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unit: default_unit(),
        }
    }
}

/// Generate a default shopfloor.toml config file.
pub fn generate_default_config() -> String {
    r#"# shopfloor configuration

[store]
# Store file, relative to the working directory.
data_file = "store_data.json"
# Seed Laptop / Mobile / Headphones when the catalog is empty.
seed_samples = true

[display]
unit = "Toman"
"#
    .to_string()
}
