//! Simulated order placement.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use turbo_cache::KvStore;

use crate::cart::{CartManager, CartObserver, OrderTotals, PricingPolicy};
use crate::error::CommerceError;

/// Order numbers are drawn from `0..ORDER_NUMBER_CEILING`.
pub const ORDER_NUMBER_CEILING: u32 = 1_000_000;

/// Where to send the shopper once an order is placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSettings {
    /// Landing page to navigate to after confirmation.
    pub landing_page: String,
    /// How long the confirmation stays up before navigating.
    pub redirect_delay: Duration,
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        Self {
            landing_page: "index.html".to_string(),
            redirect_delay: Duration::from_secs(2),
        }
    }
}

/// A delayed, fire-and-forget navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    /// Target page.
    pub to: String,
    /// Delay before navigating, in milliseconds.
    pub after_ms: u64,
}

impl Redirect {
    /// Delay as a `Duration`.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.after_ms)
    }
}

/// Result of a successful order placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Random order number.
    pub order_number: u32,
    /// Totals charged, computed before the cart was cleared.
    pub totals: OrderTotals,
    /// Number of units ordered.
    pub item_count: u64,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
    /// Navigation to perform once the confirmation has been shown.
    pub redirect: Redirect,
}

impl OrderConfirmation {
    /// Confirmation text shown to the shopper.
    pub fn message(&self) -> String {
        format!(
            "Order placed successfully!\nOrder #{}\nTotal: {}",
            self.order_number,
            self.totals.grand_total.display()
        )
    }
}

/// Place an order for everything in the cart.
///
/// Fails with [`CommerceError::EmptyCart`] and leaves the cart untouched when
/// there is nothing to order. Otherwise the totals are captured, the cart is
/// cleared (which persists and refreshes) and the confirmation carries the
/// redirect the caller should schedule.
pub fn place_order<S, O, R>(
    manager: &mut CartManager<S, O>,
    policy: &PricingPolicy,
    settings: &CheckoutSettings,
    rng: &mut R,
) -> Result<OrderConfirmation, CommerceError>
where
    S: KvStore,
    O: CartObserver,
    R: Rng + ?Sized,
{
    let item_count = manager.total_items();
    if item_count == 0 {
        tracing::debug!("order rejected: cart is empty");
        return Err(CommerceError::EmptyCart);
    }

    let totals = manager.totals(policy);
    let order_number = rng.gen_range(0..ORDER_NUMBER_CEILING);

    manager.clear()?;

    tracing::info!(
        order_number,
        item_count,
        grand_total = %totals.grand_total,
        "order placed"
    );

    Ok(OrderConfirmation {
        order_number,
        totals,
        item_count,
        placed_at: Utc::now(),
        redirect: Redirect {
            to: settings.landing_page.clone(),
            after_ms: u64::try_from(settings.redirect_delay.as_millis()).unwrap_or(u64::MAX),
        },
    })
}
