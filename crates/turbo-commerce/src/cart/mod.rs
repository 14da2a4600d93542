//! Shopping cart module.
//!
//! Contains the line item list, its persistence manager and order totals.

mod cart;
mod manager;
mod pricing;

pub use cart::{AddItem, AddOutcome, Cart, LineItem, UpdateOutcome};
pub use manager::{load_cart, CartManager, CartObserver, NoopObserver, DEFAULT_CART_KEY};
pub use pricing::{OrderTotals, PricingPolicy};
