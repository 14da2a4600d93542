//! Cart state, pricing and order placement for TurboCart.
//!
//! - **Cart**: line items keyed by `(id, size, color)`, kept in a key-value
//!   store and re-saved after every change
//! - **Pricing**: flat shipping plus percentage tax over the subtotal
//! - **Checkout**: simulated order placement with a random order number
//!
//! # Example
//!
//! ```rust
//! use turbo_cache::{Cache, MemoryStore};
//! use turbo_commerce::prelude::*;
//!
//! let mut cart = CartManager::open(Cache::new(MemoryStore::new()));
//! cart.add_item(AddItem::new("sku1", "Widget", Money::from_cents(1000))).unwrap();
//! cart.add_item(AddItem::new("sku1", "Widget", Money::from_cents(1000)).quantity(2)).unwrap();
//!
//! assert_eq!(cart.total_items(), 3);
//! assert_eq!(cart.total_price(), "30.00");
//!
//! let totals = cart.totals(&PricingPolicy::default());
//! assert_eq!(totals.grand_total.display(), "$38.39");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod checkout;

pub use cart::{AddItem, Cart, CartManager, CartObserver, LineItem, OrderTotals, PricingPolicy};
pub use checkout::{place_order, CheckoutSettings, OrderConfirmation};
pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Cart
    pub use crate::cart::{
        AddItem, AddOutcome, Cart, CartManager, CartObserver, LineItem, NoopObserver,
        OrderTotals, PricingPolicy, UpdateOutcome, DEFAULT_CART_KEY,
    };

    // Checkout
    pub use crate::checkout::{place_order, CheckoutSettings, OrderConfirmation, Redirect};
}
