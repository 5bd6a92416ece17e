//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shopfloor_commerce::storage::Inventory;
use shopfloor_db::JsonStore;
use tracing::debug;

use crate::config::{ShopConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Config file the configuration came from, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from a config file, or search for one from `cwd` upwards.
    ///
    /// `data_override` replaces the configured store file.
    pub fn load(
        config_path: Option<&Path>,
        data_override: Option<&Path>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_in(cwd, config_path, data_override, output)
    }

    fn load_in(
        cwd: PathBuf,
        config_path: Option<&Path>,
        data_override: Option<&Path>,
        output: Output,
    ) -> Result<Self> {
        let (mut config, config_path) = match config_path {
            Some(path) => (ShopConfig::load(path)?, Some(path.to_path_buf())),
            None => match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (ShopConfig::default(), None),
            },
        };

        if let Some(data) = data_override {
            config.store.data_file = data.to_string_lossy().into_owned();
        }

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
        })
    }

    /// Find a config file in the directory tree.
    fn find_config(start: &Path) -> Option<(ShopConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = ShopConfig::load(&config_path) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// The store file path.
    pub fn data_path(&self) -> PathBuf {
        self.resolve_path(&self.config.store.data_file)
    }

    /// The amount label from the display config.
    pub fn unit(&self) -> &str {
        &self.config.display.unit
    }

    /// Load the store, seeding sample products if configured.
    pub fn open_inventory(&self) -> Result<Inventory> {
        let path = self.data_path();
        let mut inventory = Inventory::open(JsonStore::open(&path))
            .with_context(|| format!("Failed to open store: {}", path.display()))?;

        if self.config.store.seed_samples && inventory.seed_samples_if_empty()? {
            debug!(path = %path.display(), "seeded sample products");
        }

        Ok(inventory)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
