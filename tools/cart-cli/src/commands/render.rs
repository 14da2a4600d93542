//! Write the checkout page.

use anyhow::{Context as _, Result};
use cart_checkout::{CheckoutPage, Document, CART_COUNT_ID, CART_ITEMS_ID, ORDER_SUMMARY_ID};
use turbo_cache::{Cache, FileStore};
use turbo_commerce::CartManager;

use super::RenderArgs;
use crate::context::{checkout_document, Context};

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let page = CheckoutPage::new(checkout_document(), ctx.config.policy()?);
    let store = FileStore::open(ctx.store_path());
    let mut cart = CartManager::load(Cache::new(store), ctx.config.store.key.clone(), page);
    cart.refresh();

    let (_, page) = cart.into_parts();
    let html = page_html(&page.into_surface());

    if args.stdout {
        print!("{}", html);
        return Ok(());
    }

    let path = ctx.resolve_path(&args.output);
    std::fs::write(&path, html)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    ctx.output
        .success(&format!("Wrote {}", path.display()));

    Ok(())
}

fn page_html(doc: &Document) -> String {
    let content = |id: &str| doc.content(id).unwrap_or_default().to_string();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Checkout</title>
</head>
<body>
    <header>
        <a href="checkout.html" class="cart-link">Cart (<span id="{count_id}">{count}</span>)</a>
    </header>
    <main class="checkout">
        <section id="{items_id}">
{items}
        </section>
        <aside id="{summary_id}">
{summary}
        </aside>
    </main>
</body>
</html>
"#,
        count_id = CART_COUNT_ID,
        count = content(CART_COUNT_ID),
        items_id = CART_ITEMS_ID,
        items = content(CART_ITEMS_ID),
        summary_id = ORDER_SUMMARY_ID,
        summary = content(ORDER_SUMMARY_ID),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbo_cache::MemoryStore;
    use turbo_commerce::{AddItem, Money, PricingPolicy};

    #[test]
    fn test_page_html_fills_every_container() {
        let page = CheckoutPage::new(checkout_document(), PricingPolicy::default());
        let mut cart = CartManager::load(Cache::new(MemoryStore::new()), "cart", page);
        cart.add_item(AddItem::new("mug", "Mug", Money::from_cents(1200)).quantity(2))
            .unwrap();

        let (_, page) = cart.into_parts();
        let html = page_html(&page.into_surface());

        assert!(html.contains(r#"<span id="cart-count">2</span>"#));
        assert!(html.contains("Mug"));
        assert!(html.contains("$31.91"));
    }
}
