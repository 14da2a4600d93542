//! Cart actions and the storefront that dispatches them.
//!
//! Rendered controls carry `data-action` plus whatever `data-*` attributes
//! the action needs. [`CartAction::from_attributes`] turns those back into a
//! typed action, and [`Storefront::dispatch`] runs it against the cart.

use std::collections::BTreeMap;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use turbo_cache::KvStore;
use turbo_commerce::cart::AddOutcome;
use turbo_commerce::{
    place_order, AddItem, CartManager, CheckoutSettings, CommerceError, Money, OrderConfirmation,
    ProductId,
};

use crate::host::PageHost;
use crate::page::CheckoutPage;
use crate::surface::RenderSurface;

const ADDED_MESSAGE: &str = "Item added to cart!";
const REMOVED_MESSAGE: &str = "Item removed from cart";

/// How long toasts stay up unless configured otherwise.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

/// Errors turning a click into a cart operation.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("missing attribute {0}")]
    MissingAttribute(&'static str),

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("invalid {attribute}: {value:?}")]
    InvalidNumber {
        attribute: &'static str,
        value: String,
    },

    #[error(transparent)]
    Commerce(#[from] CommerceError),
}

/// A user action against the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    Add(AddItem),
    Remove { id: ProductId },
    SetQuantity { id: ProductId, quantity: i64 },
    PlaceOrder,
    Clear,
}

impl CartAction {
    /// Parse an action from a control's `data-*` attributes.
    ///
    /// Attributes not used by the action are ignored, as is the order in
    /// which they appear.
    pub fn from_attributes<'a, I>(attributes: I) -> Result<Self, ActionError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let attrs: BTreeMap<&str, &str> = attributes.into_iter().collect();
        let get = |name: &'static str| attrs.get(name).copied();
        let require = |name: &'static str| get(name).ok_or(ActionError::MissingAttribute(name));

        match require("data-action")? {
            "add" => {
                let price = parse_number::<f64>("data-price", require("data-price")?)?;
                if !price.is_finite() {
                    return Err(invalid("data-price", &price.to_string()));
                }
                let quantity = match get("data-quantity") {
                    Some(raw) => parse_number::<u32>("data-quantity", raw)?,
                    None => 1,
                };
                Ok(Self::Add(
                    AddItem::new(
                        require("data-id")?,
                        require("data-name")?,
                        Money::from_decimal(price),
                    )
                    .quantity(quantity)
                    .size(get("data-size").unwrap_or_default())
                    .color(get("data-color").unwrap_or_default()),
                ))
            }
            "remove" => Ok(Self::Remove {
                id: require("data-id")?.into(),
            }),
            "set-quantity" => Ok(Self::SetQuantity {
                id: require("data-id")?.into(),
                quantity: parse_number("data-quantity", require("data-quantity")?)?,
            }),
            "place-order" => Ok(Self::PlaceOrder),
            "clear" => Ok(Self::Clear),
            other => Err(ActionError::UnknownAction(other.to_string())),
        }
    }
}

fn parse_number<T: std::str::FromStr>(
    attribute: &'static str,
    raw: &str,
) -> Result<T, ActionError> {
    raw.trim().parse().map_err(|_| invalid(attribute, raw))
}

fn invalid(attribute: &'static str, value: &str) -> ActionError {
    ActionError::InvalidNumber {
        attribute,
        value: value.to_string(),
    }
}

/// A page wired to a cart: actions in, repaints and host effects out.
pub struct Storefront<S, D, H> {
    cart: CartManager<S, CheckoutPage<D>>,
    host: H,
    settings: CheckoutSettings,
    rng: StdRng,
    toast_duration: Duration,
}

impl<S, D, H> Storefront<S, D, H>
where
    S: KvStore,
    D: RenderSurface,
    H: PageHost,
{
    /// Wire a loaded cart to a host.
    ///
    /// Order totals use the pricing policy of the cart's page.
    pub fn new(
        cart: CartManager<S, CheckoutPage<D>>,
        host: H,
        settings: CheckoutSettings,
    ) -> Self {
        Self {
            cart,
            host,
            settings,
            rng: StdRng::from_entropy(),
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Use a fixed random source for order numbers.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Set how long toasts stay up.
    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    /// First paint, once the page is ready.
    pub fn start(&mut self) {
        self.cart.refresh();
    }

    /// Run an action.
    ///
    /// Returns the confirmation when an order was placed. An empty cart at
    /// checkout is not an error here: the shopper is alerted and nothing
    /// else happens.
    pub fn dispatch(
        &mut self,
        action: CartAction,
    ) -> Result<Option<OrderConfirmation>, ActionError> {
        tracing::debug!(?action, "dispatching cart action");

        match action {
            CartAction::Add(req) => {
                if self.cart.add_item(req)? != AddOutcome::Ignored {
                    self.host.toast(ADDED_MESSAGE, self.toast_duration);
                }
            }
            CartAction::Remove { id } => {
                self.cart.remove_item(&id)?;
                self.host.toast(REMOVED_MESSAGE, self.toast_duration);
            }
            CartAction::SetQuantity { id, quantity } => {
                self.cart.update_quantity(&id, quantity)?;
            }
            CartAction::Clear => {
                self.cart.clear()?;
            }
            CartAction::PlaceOrder => return self.place_order(),
        }
        Ok(None)
    }

    /// Dispatch a click on a control with the given attributes.
    pub fn handle_click<'a, I>(
        &mut self,
        attributes: I,
    ) -> Result<Option<OrderConfirmation>, ActionError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let action = CartAction::from_attributes(attributes)?;
        self.dispatch(action)
    }

    fn place_order(&mut self) -> Result<Option<OrderConfirmation>, ActionError> {
        let policy = *self.cart.observer().policy();
        match place_order(&mut self.cart, &policy, &self.settings, &mut self.rng) {
            Ok(confirmation) => {
                self.host.alert(&confirmation.message());
                self.host.navigate(&confirmation.redirect);
                Ok(Some(confirmation))
            }
            Err(CommerceError::EmptyCart) => {
                self.host.alert(&CommerceError::EmptyCart.to_string());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// The cart manager.
    pub fn cart(&self) -> &CartManager<S, CheckoutPage<D>> {
        &self.cart
    }

    /// The page being painted.
    pub fn page(&self) -> &CheckoutPage<D> {
        self.cart.observer()
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Consume the storefront and return the cart and host.
    pub fn into_parts(self) -> (CartManager<S, CheckoutPage<D>>, H) {
        (self.cart, self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let action = CartAction::from_attributes([
            ("data-action", "add"),
            ("data-id", "tee"),
            ("data-name", "Logo Tee"),
            ("data-price", "24.99"),
            ("data-size", "M"),
        ])
        .unwrap();

        assert_eq!(
            action,
            CartAction::Add(
                AddItem::new("tee", "Logo Tee", Money::from_cents(2499))
                    .quantity(1)
                    .size("M")
            )
        );
    }

    #[test]
    fn test_parse_set_quantity_allows_negative() {
        let action = CartAction::from_attributes([
            ("data-quantity", "-1"),
            ("data-id", "tee"),
            ("data-action", "set-quantity"),
        ])
        .unwrap();

        assert_eq!(
            action,
            CartAction::SetQuantity {
                id: ProductId::new("tee"),
                quantity: -1
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            CartAction::from_attributes([("data-id", "tee")]),
            Err(ActionError::MissingAttribute("data-action"))
        ));
        assert!(matches!(
            CartAction::from_attributes([("data-action", "wishlist")]),
            Err(ActionError::UnknownAction(a)) if a == "wishlist"
        ));
        assert!(matches!(
            CartAction::from_attributes([("data-action", "remove")]),
            Err(ActionError::MissingAttribute("data-id"))
        ));
        assert!(matches!(
            CartAction::from_attributes([
                ("data-action", "set-quantity"),
                ("data-id", "tee"),
                ("data-quantity", "lots"),
            ]),
            Err(ActionError::InvalidNumber { attribute: "data-quantity", .. })
        ));
        assert!(matches!(
            CartAction::from_attributes([
                ("data-action", "add"),
                ("data-id", "tee"),
                ("data-name", "Tee"),
                ("data-price", "NaN"),
            ]),
            Err(ActionError::InvalidNumber { attribute: "data-price", .. })
        ));
    }
}
