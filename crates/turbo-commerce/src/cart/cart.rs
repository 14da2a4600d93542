//! Cart and line item types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Deserializer, Serialize};

/// One product + variant selection with a quantity.
///
/// Two line items are the same line item when `id`, `size` and `color` all
/// match; an empty variant string means "not applicable".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Product identifier.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Quantity, at least 1 while the item is in a cart.
    pub quantity: u32,
    /// Size variant, empty when not applicable.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub size: String,
    /// Color variant, empty when not applicable.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub color: String,
}

impl LineItem {
    /// Check if this item has the given composite key.
    pub fn matches(&self, id: &ProductId, size: &str, color: &str) -> bool {
        &self.id == id && self.size == size && self.color == color
    }

    /// Unit price multiplied by quantity.
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request to add a product to the cart.
///
/// Quantity defaults to 1 and unset variants to the empty string.
///
/// ```
/// use turbo_commerce::{AddItem, Money};
/// let req = AddItem::new("tee", "Logo Tee", Money::from_cents(2500))
///     .quantity(2)
///     .size("M");
/// assert_eq!(req.color, "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub quantity: u32,
    pub size: String,
    pub color: String,
}

impl AddItem {
    /// Add one unit of a product with no variant.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity: 1,
            size: String::new(),
            color: String::new(),
        }
    }

    /// Set the quantity to add.
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Set the size variant.
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Set the color variant.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// What [`Cart::add`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line item was appended.
    Inserted,
    /// An existing line item's quantity grew to `quantity`.
    Merged { quantity: u32 },
    /// Nothing changed because the requested quantity was zero.
    Ignored,
}

/// What [`Cart::update_quantity`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No line item has that product id.
    NotFound,
    /// The quantity was not positive, so every variant of the product went.
    Removed { count: usize },
    /// The first matching line item now has `quantity`.
    Updated { quantity: u32 },
}

impl UpdateOutcome {
    /// Check if the cart contents changed.
    pub fn changed(&self) -> bool {
        !matches!(self, UpdateOutcome::NotFound)
    }
}

/// The ordered list of line items for one browsing context.
///
/// Insertion order is preserved; the first item added renders first.
/// Serialized as a bare JSON array of line items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from raw line items, restoring the cart invariants.
    ///
    /// Items with zero quantity are dropped and repeated composite keys are
    /// folded into the first occurrence.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut cart = Cart::new();
        for item in items {
            if item.quantity == 0 {
                tracing::debug!(id = %item.id, "dropping zero-quantity line item");
                continue;
            }
            match cart
                .items
                .iter_mut()
                .find(|i| i.matches(&item.id, &item.size, &item.color))
            {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    /// Add a product, merging into an existing line item with the same
    /// `(id, size, color)` key.
    pub fn add(&mut self, req: AddItem) -> AddOutcome {
        if req.quantity == 0 {
            return AddOutcome::Ignored;
        }

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.matches(&req.id, &req.size, &req.color))
        {
            existing.quantity = existing.quantity.saturating_add(req.quantity);
            return AddOutcome::Merged {
                quantity: existing.quantity,
            };
        }

        self.items.push(LineItem {
            id: req.id,
            name: req.name,
            price: req.price,
            quantity: req.quantity,
            size: req.size,
            color: req.color,
        });
        AddOutcome::Inserted
    }

    /// Remove every line item of a product, whatever its variant.
    ///
    /// Returns how many line items were removed.
    pub fn remove(&mut self, id: &ProductId) -> usize {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        len_before - self.items.len()
    }

    /// Set the quantity of the first line item of a product.
    ///
    /// A quantity of zero or less removes every variant of the product, not
    /// only the first one. Quantities above `u32::MAX` are clamped to it.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> UpdateOutcome {
        let Some(item) = self.items.iter_mut().find(|i| &i.id == id) else {
            return UpdateOutcome::NotFound;
        };

        if quantity <= 0 {
            return UpdateOutcome::Removed {
                count: self.remove(id),
            };
        }

        item.quantity = u32::try_from(quantity).unwrap_or_else(|_| {
            tracing::debug!(id = %item.id, quantity, "clamping quantity to u32::MAX");
            u32::MAX
        });
        UpdateOutcome::Updated {
            quantity: item.quantity,
        }
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Read-only view of the items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total item count (sum of quantities).
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of price times quantity over every line item.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, i| acc + i.line_total())
    }

    /// Subtotal formatted with exactly two fractional digits (e.g. "30.00").
    pub fn total_price(&self) -> String {
        self.subtotal().display_amount()
    }
}

impl From<Vec<LineItem>> for Cart {
    fn from(items: Vec<LineItem>) -> Self {
        Cart::from_items(items)
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}
