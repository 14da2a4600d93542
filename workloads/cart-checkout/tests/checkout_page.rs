//! Clicks on rendered controls, end to end.

use std::time::Duration;

use cart_checkout::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use turbo_cache::{Cache, MemoryStore};
use turbo_commerce::prelude::*;

type Shop = Storefront<MemoryStore, Document, RecordingHost>;

fn shop_at(path: &str, store: MemoryStore) -> Shop {
    let doc = Document::new(path)
        .with_element(CART_COUNT_ID)
        .with_element(CART_COUNT_ID)
        .with_element(CART_ITEMS_ID)
        .with_element(ORDER_SUMMARY_ID);
    let page = CheckoutPage::new(doc, PricingPolicy::default());
    let cart = CartManager::load(Cache::new(store), DEFAULT_CART_KEY, page);

    let mut shop = Storefront::new(cart, RecordingHost::new(), CheckoutSettings::default())
        .with_rng(StdRng::seed_from_u64(2024));
    shop.start();
    shop
}

fn add_tee(shop: &mut Shop, size: &str) {
    shop.handle_click([
        ("data-action", "add"),
        ("data-id", "tee"),
        ("data-name", "Logo Tee"),
        ("data-price", "25"),
        ("data-size", size),
    ])
    .unwrap();
}

#[test]
fn first_paint_shows_stored_cart() {
    let stored =
        r#"[{"id":"tee","name":"Logo Tee","price":25,"quantity":3,"size":"M","color":""}]"#;
    let shop = shop_at("/checkout.html", MemoryStore::new().with_entry(DEFAULT_CART_KEY, stored));

    let doc = shop.page().surface();
    assert_eq!(doc.contents(CART_COUNT_ID), vec!["3", "3"]);
    assert!(doc.content(CART_ITEMS_ID).unwrap().contains("Logo Tee"));
    assert!(doc.content(ORDER_SUMMARY_ID).unwrap().contains("$86.99"));
}

#[test]
fn add_then_rendered_controls_drive_the_cart() {
    let mut shop = shop_at("/checkout.html", MemoryStore::new());
    add_tee(&mut shop, "M");
    add_tee(&mut shop, "M");
    assert_eq!(shop.cart().total_items(), 2);

    // The rendered "+" control carries the next quantity.
    let items = shop.page().surface().content(CART_ITEMS_ID).unwrap().to_string();
    assert!(items.contains(r#"data-action="set-quantity" data-id="tee" data-quantity="3""#));

    shop.handle_click([
        ("data-action", "set-quantity"),
        ("data-id", "tee"),
        ("data-quantity", "3"),
    ])
    .unwrap();
    assert_eq!(shop.page().surface().content(CART_COUNT_ID), Some("3"));

    shop.handle_click([("data-action", "remove"), ("data-id", "tee")])
        .unwrap();
    assert!(shop.cart().items().is_empty());
    assert!(shop
        .page()
        .surface()
        .content(CART_ITEMS_ID)
        .unwrap()
        .contains("Your cart is empty"));

    let toasts: Vec<&HostEvent> = shop
        .host()
        .events()
        .iter()
        .filter(|e| matches!(e, HostEvent::Toast { .. }))
        .collect();
    assert_eq!(toasts.len(), 3);
    assert_eq!(
        toasts[2],
        &HostEvent::Toast {
            message: "Item removed from cart".to_string(),
            duration: Duration::from_secs(3),
        }
    );
}

#[test]
fn decrement_to_zero_removes_every_variant() {
    let mut shop = shop_at("/checkout.html", MemoryStore::new());
    add_tee(&mut shop, "M");
    add_tee(&mut shop, "L");

    shop.handle_click([
        ("data-action", "set-quantity"),
        ("data-id", "tee"),
        ("data-quantity", "0"),
    ])
    .unwrap();

    assert_eq!(shop.cart().total_items(), 0);
}

#[test]
fn place_order_on_empty_cart_only_alerts() {
    let mut shop = shop_at("/checkout.html", MemoryStore::new());
    let renders = shop.page().renders();

    let result = shop.handle_click([("data-action", "place-order")]).unwrap();

    assert!(result.is_none());
    assert_eq!(shop.host().alerts(), vec!["Your cart is empty!"]);
    assert!(!shop.host().navigated());
    assert_eq!(shop.page().renders(), renders);
    assert!(shop.cart().cache().store().is_empty());
}

#[test]
fn place_order_confirms_clears_and_redirects() {
    let mut shop = shop_at("/checkout.html", MemoryStore::new());
    add_tee(&mut shop, "M");
    add_tee(&mut shop, "L");
    add_tee(&mut shop, "L");
    add_tee(&mut shop, "S");

    let confirmation = shop
        .handle_click([("data-action", "place-order")])
        .unwrap()
        .unwrap();

    assert_eq!(confirmation.totals.grand_total.display(), "$113.99");
    assert!(confirmation.order_number < 1_000_000);
    assert_eq!(shop.cart().total_items(), 0);
    assert_eq!(shop.page().surface().content(CART_COUNT_ID), Some("0"));
    assert_eq!(shop.page().surface().content(ORDER_SUMMARY_ID), Some(""));

    let alerts = shop.host().alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].starts_with("Order placed successfully!\nOrder #"));
    assert!(alerts[0].ends_with("Total: $113.99"));

    let events = shop.host().events();
    assert_eq!(
        events.last(),
        Some(&HostEvent::Navigate(Redirect {
            to: "index.html".to_string(),
            after_ms: 2000,
        }))
    );
}

#[test]
fn badge_only_on_other_pages() {
    let mut shop = shop_at("/store.html", MemoryStore::new());
    add_tee(&mut shop, "M");

    let doc = shop.page().surface();
    assert_eq!(doc.contents(CART_COUNT_ID), vec!["1", "1"]);
    assert_eq!(doc.content(CART_ITEMS_ID), Some(""));
    assert!(!shop.page().is_checkout());
}

#[test]
fn malformed_click_changes_nothing() {
    let mut shop = shop_at("/checkout.html", MemoryStore::new());
    let err = shop
        .handle_click([("data-action", "add"), ("data-id", "tee")])
        .unwrap_err();

    assert!(matches!(err, ActionError::MissingAttribute(_)));
    assert!(shop.host().events().is_empty());
    assert!(shop.cart().items().is_empty());
}

#[test]
fn zero_quantity_add_shows_no_toast() {
    let mut shop = shop_at("/checkout.html", MemoryStore::new());
    shop.handle_click([
        ("data-action", "add"),
        ("data-id", "tee"),
        ("data-name", "Logo Tee"),
        ("data-price", "25"),
        ("data-quantity", "0"),
    ])
    .unwrap();

    assert!(shop.cart().items().is_empty());
    assert!(shop.host().events().is_empty());
}

#[test]
fn extreme_negative_price_still_renders() {
    let mut shop = shop_at("/checkout.html", MemoryStore::new());
    shop.handle_click([
        ("data-action", "add"),
        ("data-id", "x"),
        ("data-name", "X"),
        ("data-price", "-1e300"),
    ])
    .unwrap();

    let doc = shop.page().surface();
    assert_eq!(doc.content(CART_COUNT_ID), Some("1"));
    assert!(doc.content(CART_ITEMS_ID).unwrap().contains("-$92233720368547758.08"));
    assert!(doc.content(ORDER_SUMMARY_ID).unwrap().contains("-$"));
}
