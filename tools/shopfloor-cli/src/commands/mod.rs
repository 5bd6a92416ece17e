//! CLI command implementations.

pub mod config;
pub mod orders;
pub mod products;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args, Default)]
pub struct ProductsArgs {
    /// Only list products that are in stock.
    #[arg(long)]
    pub in_stock: bool,
}

/// Arguments for the orders command.
#[derive(Args, Default)]
pub struct OrdersArgs {
    /// Show only the last N orders.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
