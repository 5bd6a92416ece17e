//! Show the order history.

use anyhow::Result;
use shopfloor_commerce::checkout::Order;

use super::OrdersArgs;
use crate::context::Context;

const WIDTHS: [usize; 4] = [6, 21, 8, 16];

/// Run the orders command.
pub fn run(args: OrdersArgs, ctx: &Context) -> Result<()> {
    let inventory = ctx.open_inventory()?;
    let orders = last_n(inventory.orders(), args.limit);

    if ctx.output.is_json() {
        return ctx.output.json(&orders);
    }

    ctx.output.header("Orders");
    if orders.is_empty() {
        ctx.output.info("No orders yet");
        return Ok(());
    }

    let total_header = format!("Total ({})", ctx.unit());
    ctx.output
        .table_row(&["ID", "Date", "Items", &total_header], &WIDTHS);
    for order in orders {
        ctx.output.table_row(
            &[
                &order.id.to_string(),
                &order.date,
                &order.item_count().to_string(),
                &order.total.to_string(),
            ],
            &WIDTHS,
        );
    }

    Ok(())
}

/// The newest `limit` orders, still oldest first.
fn last_n(orders: &[Order], limit: Option<usize>) -> &[Order] {
    match limit {
        Some(n) if n < orders.len() => &orders[orders.len() - n..],
        _ => orders,
    }
}
