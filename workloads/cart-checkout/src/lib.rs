//! Cart badge and checkout page - Reference workload.
//!
//! Renders cart state into page elements and turns clicks on rendered
//! controls back into cart operations:
//! - `cart-count` badges always show the number of units in the cart
//! - on a checkout page, `cart-items` and `order-summary` are rebuilt from
//!   scratch after every change
//! - controls carry `data-action` attributes instead of inline handlers, so
//!   event wiring lives in [`Storefront::handle_click`], not in markup

mod actions;
mod host;
mod page;
mod sections;
mod surface;

pub use actions::{ActionError, CartAction, Storefront, DEFAULT_TOAST_DURATION};
pub use host::{HostEvent, PageHost, RecordingHost};
pub use page::{CheckoutPage, CART_COUNT_ID, CART_ITEMS_ID, ORDER_SUMMARY_ID};
pub use sections::{render_cart_items, render_empty_cart, render_order_summary};
pub use surface::{Document, RenderSurface};
