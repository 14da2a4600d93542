//! Cart mutations.

use anyhow::{bail, Result};
use cart_checkout::CartAction;
use dialoguer::Confirm;
use turbo_commerce::{AddItem, Money, ProductId};

use super::{AddArgs, ClearArgs, RemoveArgs, UpdateArgs};
use crate::context::{CliStorefront, Context};

/// Run the add command.
pub async fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    if !args.price.is_finite() {
        bail!("Invalid price: {}", args.price);
    }
    if args.quantity == 0 {
        ctx.output.warn("Quantity is 0, nothing to add");
    }

    let mut req = AddItem::new(args.id, args.name, Money::from_decimal(args.price))
        .quantity(args.quantity);
    if let Some(size) = args.size {
        req = req.size(size);
    }
    if let Some(color) = args.color {
        req = req.color(color);
    }

    let mut shop = ctx.storefront()?;
    shop.dispatch(CartAction::Add(req))?;
    report(&shop, ctx);
    Ok(())
}

/// Run the remove command.
pub async fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;
    let id = ProductId::new(args.id);

    if !shop.cart().items().iter().any(|i| i.id == id) {
        ctx.output.warn(&format!("{} is not in the cart", id));
    }

    shop.dispatch(CartAction::Remove { id })?;
    report(&shop, ctx);
    Ok(())
}

/// Run the update command.
pub async fn update(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;
    let id = ProductId::new(args.id);

    if !shop.cart().items().iter().any(|i| i.id == id) {
        ctx.output.warn(&format!("{} is not in the cart", id));
    }

    shop.dispatch(CartAction::SetQuantity {
        id: id.clone(),
        quantity: args.quantity,
    })?;

    if args.quantity <= 0 {
        ctx.output.success(&format!("Removed {}", id));
    } else {
        ctx.output
            .success(&format!("Set {} to {}", id, args.quantity));
    }
    report(&shop, ctx);
    Ok(())
}

/// Run the clear command.
pub async fn clear(args: ClearArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;

    if shop.cart().items().is_empty() {
        ctx.output.info("Cart is already empty");
        report(&shop, ctx);
        return Ok(());
    }

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove all {} items from the cart?",
                shop.cart().total_items()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Clear cancelled");
            return Ok(());
        }
    }

    shop.dispatch(CartAction::Clear)?;
    ctx.output.success("Cart cleared");
    report(&shop, ctx);
    Ok(())
}

/// Print the cart state after a mutation.
fn report(shop: &CliStorefront, ctx: &Context) {
    let cart = shop.cart();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": cart.items(),
            "total_items": cart.total_items(),
            "total_price": cart.total_price(),
        }));
        return;
    }

    ctx.output.kv("Items in cart", &cart.total_items().to_string());
    ctx.output.kv("Subtotal", &format!("${}", cart.total_price()));
}
