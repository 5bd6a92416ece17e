//! The interactive shop session.

use anyhow::Result;
use tracing::debug;

use crate::context::Context;
use crate::menu::{Menu, TermPrompter};

/// Run the interactive menu until the user exits.
pub fn run(ctx: &Context) -> Result<()> {
    let mut inventory = ctx.open_inventory()?;
    ctx.output
        .debug(&format!("Using store {}", inventory.store().path().display()));

    // The menu prints its prompts even with --json.
    let prompter = TermPrompter::new(ctx.output.clone());
    let mut menu = Menu::new(&mut inventory, prompter, ctx.unit());
    menu.run()?;

    let left = menu.cart().item_count();
    if left > 0 {
        debug!(items = left, "discarding uncommitted cart");
    }
    Ok(())
}
