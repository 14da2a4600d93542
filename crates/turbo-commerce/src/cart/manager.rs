//! Cart state manager.
//!
//! Owns the authoritative in-memory [`Cart`], writes it back to the store
//! after every mutation and then tells its observer to refresh the display.
//! Constructed once at start-up and handed to whatever handles UI actions.

use turbo_cache::{Cache, KvStore};

use crate::cart::{
    AddItem, AddOutcome, Cart, LineItem, OrderTotals, PricingPolicy, UpdateOutcome,
};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Store key the storefront has always used for the cart.
pub const DEFAULT_CART_KEY: &str = "ecommerce-cart";

/// Receives a read-only cart after every mutation.
pub trait CartObserver {
    /// Called once per mutation, after the cart has been persisted.
    fn cart_changed(&mut self, cart: &Cart);
}

/// Observer that ignores every change.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CartObserver for NoopObserver {
    fn cart_changed(&mut self, _cart: &Cart) {}
}

impl<F: FnMut(&Cart)> CartObserver for F {
    fn cart_changed(&mut self, cart: &Cart) {
        self(cart)
    }
}

/// Read the cart stored under `key`.
///
/// An absent key, an unreadable store and an unparseable value all yield an
/// empty cart; none of them is reported to the caller.
pub fn load_cart<S: KvStore>(cache: &Cache<S>, key: &str) -> Cart {
    match cache.get::<Cart>(key) {
        Ok(Some(cart)) => cart,
        Ok(None) => Cart::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding unreadable cart");
            Cart::new()
        }
    }
}

/// The cart plus the store it lives in and the observer that displays it.
pub struct CartManager<S, O = NoopObserver> {
    cache: Cache<S>,
    key: String,
    cart: Cart,
    observer: O,
}

impl<S: KvStore> CartManager<S, NoopObserver> {
    /// Load the cart under [`DEFAULT_CART_KEY`] with no observer.
    pub fn open(cache: Cache<S>) -> Self {
        Self::load(cache, DEFAULT_CART_KEY, NoopObserver)
    }
}

impl<S: KvStore, O: CartObserver> CartManager<S, O> {
    /// Load the cart stored under `key`.
    ///
    /// The observer is not called here; call [`CartManager::refresh`] once
    /// the display is ready for its first paint.
    pub fn load(cache: Cache<S>, key: impl Into<String>, observer: O) -> Self {
        let key = key.into();
        let cart = load_cart(&cache, &key);
        tracing::debug!(key = %key, items = cart.len(), "cart loaded");
        Self {
            cache,
            key,
            cart,
            observer,
        }
    }

    /// Add a product, merging into a line item with the same
    /// `(id, size, color)` key.
    ///
    /// A failed store write is returned without refreshing the observer. The
    /// in-memory cart keeps the change, so the next successful write saves it.
    pub fn add_item(&mut self, req: AddItem) -> Result<AddOutcome, CommerceError> {
        let id = req.id.clone();
        let added = req.quantity;
        let outcome = self.cart.add(req);
        match outcome {
            AddOutcome::Inserted => tracing::debug!(%id, quantity = added, "line item added"),
            AddOutcome::Merged { quantity } => {
                tracing::debug!(%id, added, quantity, "line item merged")
            }
            AddOutcome::Ignored => tracing::debug!(%id, "ignoring add of zero quantity"),
        }
        self.commit()?;
        Ok(outcome)
    }

    /// Remove every line item of a product. Unknown ids are a no-op.
    pub fn remove_item(&mut self, id: &ProductId) -> Result<(), CommerceError> {
        let removed = self.cart.remove(id);
        tracing::debug!(%id, removed, "line items removed");
        self.commit()
    }

    /// Set the quantity of the first line item of a product; zero or less
    /// removes every variant of it.
    ///
    /// The store is only written when a line item matched, but the observer
    /// is notified either way.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<(), CommerceError> {
        let outcome = self.cart.update_quantity(id, quantity);
        tracing::debug!(%id, quantity, ?outcome, "quantity update");
        if outcome.changed() {
            self.persist()?;
        }
        self.refresh();
        Ok(())
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.cart.clear();
        tracing::debug!(key = %self.key, "cart cleared");
        self.commit()
    }

    /// Total item count (sum of quantities).
    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    /// Subtotal with exactly two fractional digits.
    pub fn total_price(&self) -> String {
        self.cart.total_price()
    }

    /// Totals for the current cart under a pricing policy.
    pub fn totals(&self, policy: &PricingPolicy) -> OrderTotals {
        OrderTotals::for_cart(&self.cart, policy)
    }

    /// Read-only view of the line items.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Owned copy of the line items; changing it does not touch the cart.
    pub fn snapshot(&self) -> Vec<LineItem> {
        self.cart.items().to_vec()
    }

    /// The cart itself.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Store key the cart is saved under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the cache.
    pub fn cache(&self) -> &Cache<S> {
        &self.cache
    }

    /// Borrow the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Push the current cart to the observer.
    pub fn refresh(&mut self) {
        self.observer.cart_changed(&self.cart);
    }

    /// Consume the manager and return its parts.
    pub fn into_parts(self) -> (Cache<S>, O) {
        (self.cache, self.observer)
    }

    fn commit(&mut self) -> Result<(), CommerceError> {
        self.persist()?;
        self.refresh();
        Ok(())
    }

    fn persist(&mut self) -> Result<(), CommerceError> {
        self.cache.set(&self.key, &self.cart)?;
        Ok(())
    }
}
