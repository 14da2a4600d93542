//! Order placement.

use anyhow::Result;
use cart_checkout::CartAction;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;

    ctx.output.header("Checkout");

    // The storefront alerts on an empty cart and returns no confirmation.
    let Some(confirmation) = shop.dispatch(CartAction::PlaceOrder)? else {
        if ctx.output.is_json() {
            ctx.output.json(&serde_json::json!({ "order": null }));
        }
        return Ok(());
    };

    if ctx.output.is_json() {
        ctx.output.json(&confirmation);
        return Ok(());
    }

    ctx.output.kv(
        "Placed at",
        &confirmation.placed_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );

    let redirect = &confirmation.redirect;
    if args.no_wait {
        ctx.output.info(&format!("Continue at {}", redirect.to));
        return Ok(());
    }

    let pb = ctx
        .output
        .countdown(&format!("Returning to {}", redirect.to), redirect.delay());
    tokio::time::sleep(redirect.delay()).await;
    pb.finish_and_clear();

    ctx.output.success(&format!("Redirected to {}", redirect.to));
    Ok(())
}
