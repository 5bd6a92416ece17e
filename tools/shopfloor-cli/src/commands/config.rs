//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        return ctx.output.json(&ctx.config);
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "(defaults)"),
    }

    ctx.output.line("");
    ctx.output.line("[store]");
    ctx.output.kv("data_file", &ctx.config.store.data_file);
    ctx.output
        .kv("resolved", &ctx.data_path().display().to_string());
    ctx.output
        .kv("seed_samples", &ctx.config.store.seed_samples.to_string());

    ctx.output.line("");
    ctx.output.line("[display]");
    ctx.output.kv("unit", &ctx.config.display.unit);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("shopfloor.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;
    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}
