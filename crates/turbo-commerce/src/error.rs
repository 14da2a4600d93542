//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart and checkout operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// An order was placed with nothing in the cart.
    #[error("Your cart is empty!")]
    EmptyCart,

    /// Pricing configuration is out of range.
    #[error("Invalid pricing: {0}")]
    InvalidPricing(String),

    /// The store rejected a read or write.
    #[error("Cart store error: {0}")]
    Store(#[from] turbo_cache::CacheError),
}
