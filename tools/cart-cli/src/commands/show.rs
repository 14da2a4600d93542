//! Read-only views of the cart.

use anyhow::Result;

use crate::context::Context;
use crate::output::{money_cell, variant_cell};

const WIDTHS: [usize; 7] = [10, 24, 6, 8, 4, 10, 10];

/// Run the list command.
pub async fn list(ctx: &Context) -> Result<()> {
    let cart = ctx.open_cart();

    if ctx.output.is_json() {
        ctx.output.json(&cart.items());
        return Ok(());
    }

    ctx.output.header("Cart");

    if cart.items().is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    ctx.output.table_row(
        &["ID", "NAME", "SIZE", "COLOR", "QTY", "PRICE", "TOTAL"],
        &WIDTHS,
    );
    for item in cart.items() {
        let quantity = item.quantity.to_string();
        let price = money_cell(item.price);
        let total = money_cell(item.line_total());
        ctx.output.table_row(
            &[
                item.id.as_str(),
                &item.name,
                variant_cell(&item.size),
                variant_cell(&item.color),
                &quantity,
                &price,
                &total,
            ],
            &WIDTHS,
        );
    }

    println!();
    ctx.output.kv("Items", &cart.total_items().to_string());
    ctx.output.kv("Subtotal", &format!("${}", cart.total_price()));

    Ok(())
}

/// Run the summary command.
pub async fn summary(ctx: &Context) -> Result<()> {
    let cart = ctx.open_cart();
    let totals = cart.totals(&ctx.config.policy()?);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "item_count": cart.total_items(),
            "totals": totals,
        }));
        return Ok(());
    }

    ctx.output.header("Order Summary");
    ctx.output.kv("Items", &cart.total_items().to_string());
    ctx.output.kv("Subtotal", &money_cell(totals.subtotal));
    ctx.output.kv("Shipping", &money_cell(totals.shipping));
    ctx.output.kv("Tax     ", &money_cell(totals.tax));
    ctx.output.kv("Total   ", &money_cell(totals.grand_total));

    Ok(())
}
