//! Checkout module.
//!
//! Order placement is simulated: there is no payment or order backend.

mod order;

pub use order::{place_order, CheckoutSettings, OrderConfirmation, Redirect, ORDER_NUMBER_CEILING};
