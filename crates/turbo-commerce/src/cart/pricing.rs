//! Order total calculation.
//!
//! Shipping is a flat fee charged only when the subtotal is positive; tax is a
//! percentage of the subtotal. Tax is carried exactly (in ten-thousandths of a
//! cent) and the grand total is rounded to cents once, at the end. Every
//! place that shows totals goes through [`OrderTotals::compute`], so the
//! checkout summary and the order confirmation always agree.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Basis points in one whole (100%).
const BASIS_POINTS: i128 = 10_000;

/// Shipping and tax rules applied to a subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Flat shipping fee for a non-empty order.
    pub flat_shipping: Money,
    /// Tax rate in basis points (800 = 8%).
    pub tax_rate_bp: u32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            flat_shipping: Money::from_cents(599),
            tax_rate_bp: 800,
        }
    }
}

impl PricingPolicy {
    /// Create a policy from exact values.
    pub fn new(flat_shipping: Money, tax_rate_bp: u32) -> Self {
        Self {
            flat_shipping,
            tax_rate_bp,
        }
    }

    /// Create a policy from a decimal fee and a fractional rate (0.08 = 8%).
    pub fn from_decimal(flat_shipping: f64, tax_rate: f64) -> Result<Self, CommerceError> {
        if !flat_shipping.is_finite() || flat_shipping < 0.0 {
            return Err(CommerceError::InvalidPricing(format!(
                "flat shipping must be a non-negative amount, got {flat_shipping}"
            )));
        }
        if !tax_rate.is_finite() || !(0.0..=1.0).contains(&tax_rate) {
            return Err(CommerceError::InvalidPricing(format!(
                "tax rate must be between 0 and 1, got {tax_rate}"
            )));
        }

        Ok(Self::new(
            Money::from_decimal(flat_shipping),
            (tax_rate * BASIS_POINTS as f64).round() as u32,
        ))
    }

    /// Tax rate as a fraction (0.08 = 8%).
    pub fn tax_rate(&self) -> f64 {
        f64::from(self.tax_rate_bp) / BASIS_POINTS as f64
    }

    /// Shipping owed on a subtotal.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal.is_positive() {
            self.flat_shipping
        } else {
            Money::zero()
        }
    }
}

/// Subtotal, shipping, tax and grand total for one cart state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Sum of price times quantity.
    pub subtotal: Money,
    /// Shipping charge.
    pub shipping: Money,
    /// Tax, rounded to cents for display.
    pub tax: Money,
    /// Subtotal + shipping + exact tax, rounded to cents.
    pub grand_total: Money,
}

impl OrderTotals {
    /// Derive totals from a subtotal.
    pub fn compute(subtotal: Money, policy: &PricingPolicy) -> Self {
        let shipping = policy.shipping_for(subtotal);

        // Tax in units of 1/BASIS_POINTS cent, kept exact until the end.
        let tax_scaled = i128::from(subtotal.cents()) * i128::from(policy.tax_rate_bp);
        let base_scaled =
            (i128::from(subtotal.cents()) + i128::from(shipping.cents())) * BASIS_POINTS;

        Self {
            subtotal,
            shipping,
            tax: Money::from_cents(round_scaled(tax_scaled)),
            grand_total: Money::from_cents(round_scaled(base_scaled + tax_scaled)),
        }
    }

    /// Totals for the current contents of a cart.
    pub fn for_cart(cart: &Cart, policy: &PricingPolicy) -> Self {
        Self::compute(cart.subtotal(), policy)
    }
}

/// Round a scaled amount to whole cents, half away from zero.
fn round_scaled(scaled: i128) -> i64 {
    let quotient = scaled / BASIS_POINTS;
    let remainder = scaled % BASIS_POINTS;
    let rounded = if remainder.abs() * 2 >= BASIS_POINTS {
        quotient + scaled.signum()
    } else {
        quotient
    };
    i64::try_from(rounded).unwrap_or(if rounded < 0 { i64::MIN } else { i64::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hundred_dollar_order() {
        let totals = OrderTotals::compute(Money::from_cents(10_000), &PricingPolicy::default());
        assert_eq!(totals.shipping.display_amount(), "5.99");
        assert_eq!(totals.tax.display_amount(), "8.00");
        assert_eq!(totals.grand_total.display_amount(), "113.99");
    }

    #[test]
    fn test_empty_order_has_no_shipping() {
        let totals = OrderTotals::compute(Money::zero(), &PricingPolicy::default());
        assert!(totals.shipping.is_zero());
        assert!(totals.tax.is_zero());
        assert!(totals.grand_total.is_zero());
    }

    #[test]
    fn test_negative_subtotal_has_no_shipping() {
        let totals = OrderTotals::compute(Money::from_cents(-1000), &PricingPolicy::default());
        assert!(totals.shipping.is_zero());
        assert_eq!(totals.tax.cents(), -80);
        assert_eq!(totals.grand_total.cents(), -1080);
    }

    #[test]
    fn test_tax_rounded_only_at_the_end() {
        // 19.99 * 0.08 = 1.5992, grand = 19.99 + 5.99 + 1.5992 = 27.5792
        let totals = OrderTotals::compute(Money::from_cents(1999), &PricingPolicy::default());
        assert_eq!(totals.tax.cents(), 160);
        assert_eq!(totals.grand_total.cents(), 2758);

        // 0.05 * 0.08 = 0.004 -> tax shows 0.00, grand = 6.044 -> 6.04
        let totals = OrderTotals::compute(Money::from_cents(5), &PricingPolicy::default());
        assert_eq!(totals.tax.cents(), 0);
        assert_eq!(totals.grand_total.cents(), 604);
    }

    #[test]
    fn test_half_cent_rounds_up() {
        // 0.25 * 0.10 = 0.025 -> 0.03
        let policy = PricingPolicy::new(Money::zero(), 1000);
        let totals = OrderTotals::compute(Money::from_cents(25), &policy);
        assert_eq!(totals.tax.cents(), 3);
        assert_eq!(totals.grand_total.cents(), 28);
    }

    #[test]
    fn test_policy_from_decimal() {
        let policy = PricingPolicy::from_decimal(5.99, 0.08).unwrap();
        assert_eq!(policy, PricingPolicy::default());
        assert!((policy.tax_rate() - 0.08).abs() < f64::EPSILON);

        assert!(PricingPolicy::from_decimal(-1.0, 0.08).is_err());
        assert!(PricingPolicy::from_decimal(5.99, 1.5).is_err());
        assert!(PricingPolicy::from_decimal(f64::NAN, 0.08).is_err());
    }

    #[test]
    fn test_same_cart_same_totals() {
        use crate::cart::AddItem;

        let mut cart = Cart::new();
        cart.add(AddItem::new("a", "A", Money::from_decimal(12.34)).quantity(3));
        cart.add(AddItem::new("b", "B", Money::from_decimal(0.99)));

        let policy = PricingPolicy::default();
        let summary = OrderTotals::for_cart(&cart, &policy);
        let reparsed = Money::from_decimal(cart.total_price().parse().unwrap());
        let confirmation = OrderTotals::compute(reparsed, &policy);
        assert_eq!(summary, confirmation);
    }
}
