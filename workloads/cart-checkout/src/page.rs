//! Display refresh for the cart badge and the checkout page.

use turbo_commerce::{Cart, CartObserver, OrderTotals, PricingPolicy};

use crate::sections::{render_cart_items, render_order_summary};
use crate::surface::RenderSurface;

/// Cart count badge, present on every page.
pub const CART_COUNT_ID: &str = "cart-count";
/// Line item list container on the checkout page.
pub const CART_ITEMS_ID: &str = "cart-items";
/// Order summary container on the checkout page.
pub const ORDER_SUMMARY_ID: &str = "order-summary";

/// Paths containing this are checkout pages.
const CHECKOUT_PATH_MARKER: &str = "checkout";

/// Observer that repaints a page whenever the cart changes.
#[derive(Debug, Clone)]
pub struct CheckoutPage<D> {
    surface: D,
    policy: PricingPolicy,
    renders: u64,
}

impl<D: RenderSurface> CheckoutPage<D> {
    /// Paint into `surface`, pricing with `policy`.
    pub fn new(surface: D, policy: PricingPolicy) -> Self {
        Self {
            surface,
            policy,
            renders: 0,
        }
    }

    /// Check if the surface is a checkout page.
    pub fn is_checkout(&self) -> bool {
        self.surface.path().contains(CHECKOUT_PATH_MARKER)
    }

    /// Repaint everything that depends on the cart.
    ///
    /// Badges always get the unit count. On a checkout page both containers
    /// are rebuilt in full; an empty cart shows the empty message and blanks
    /// the summary.
    pub fn render(&mut self, cart: &Cart) {
        let count = cart.total_items().to_string();
        self.surface.set_text_all(CART_COUNT_ID, &count);

        if self.is_checkout() {
            self.surface
                .set_html(CART_ITEMS_ID, &render_cart_items(cart.items()));

            let summary = if cart.is_empty() {
                String::new()
            } else {
                render_order_summary(&OrderTotals::for_cart(cart, &self.policy))
            };
            self.surface.set_html(ORDER_SUMMARY_ID, &summary);
        }

        self.renders += 1;
        tracing::trace!(
            path = self.surface.path(),
            count = %count,
            renders = self.renders,
            "page refreshed"
        );
    }

    /// How many times the page has been painted.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Pricing used for the summary.
    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Borrow the surface.
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Consume the page and return the surface.
    pub fn into_surface(self) -> D {
        self.surface
    }
}

impl<D: RenderSurface> CartObserver for CheckoutPage<D> {
    fn cart_changed(&mut self, cart: &Cart) {
        self.render(cart);
    }
}
