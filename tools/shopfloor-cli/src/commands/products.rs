//! List the catalog.

use anyhow::Result;
use shopfloor_commerce::catalog::{Catalog, Product};

use super::ProductsArgs;
use crate::context::Context;
use crate::output::stock_badge;

const WIDTHS: [usize; 4] = [6, 24, 14, 12];

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let inventory = ctx.open_inventory()?;
    let products = listed(inventory.catalog(), args.in_stock);

    if ctx.output.is_json() {
        return ctx.output.json(&products);
    }

    ctx.output.header("Products");
    if products.is_empty() {
        ctx.output.info("No products in the catalog");
        return Ok(());
    }

    let price_header = format!("Price ({})", ctx.unit());
    ctx.output
        .table_row(&["ID", "Name", &price_header, "Stock"], &WIDTHS);
    for product in products {
        ctx.output.table_row(
            &[
                &product.id.to_string(),
                &product.name,
                &product.price.to_string(),
                &stock_badge(product.quantity),
            ],
            &WIDTHS,
        );
    }

    Ok(())
}

/// Products to list, optionally skipping the sold-out ones.
fn listed(catalog: &Catalog, in_stock: bool) -> Vec<&Product> {
    catalog
        .iter()
        .filter(|p| !in_stock || !p.is_out_of_stock())
        .collect()
}
