//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The storefront has a
//! single currency, displayed with a literal `$` prefix.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Mul};

/// Cents per currency unit.
const CENTS_PER_UNIT: i64 = 100;

/// A monetary amount in cents.
///
/// Serialized as a JSON decimal number (`19.99`), which is how the persisted
/// cart has always stored prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Create a Money value from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// ```
    /// use turbo_commerce::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.cents(), 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::from_cents((amount * CENTS_PER_UNIT as f64).round() as i64)
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self::from_cents(0)
    }

    /// Amount in cents.
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Multiply by a quantity, saturating instead of overflowing.
    pub fn times(&self, quantity: u32) -> Money {
        Money::from_cents(self.cents.saturating_mul(i64::from(quantity)))
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}${}", self.sign(), self.magnitude())
    }

    /// Format with exactly two fractional digits and no symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        format!("{}{}", self.sign(), self.magnitude())
    }

    fn sign(&self) -> &'static str {
        if self.cents < 0 {
            "-"
        } else {
            ""
        }
    }

    /// Absolute amount as `units.cents`; `unsigned_abs` covers `i64::MIN`.
    fn magnitude(&self) -> String {
        let abs = self.cents.unsigned_abs();
        let unit = CENTS_PER_UNIT.unsigned_abs();
        format!("{}.{:02}", abs / unit, abs % unit)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_cents(self.cents.saturating_add(other.cents))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.times(quantity)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.cents % CENTS_PER_UNIT == 0 {
            serializer.serialize_i64(self.cents / CENTS_PER_UNIT)
        } else {
            serializer.serialize_f64(self.to_decimal())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MoneyVisitor;

        impl de::Visitor<'_> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal amount")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
                if v.is_finite() {
                    Ok(Money::from_decimal(v))
                } else {
                    Err(E::custom("amount is not finite"))
                }
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
                v.checked_mul(CENTS_PER_UNIT)
                    .map(Money::from_cents)
                    .ok_or_else(|| E::custom("amount out of range"))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
                i64::try_from(v)
                    .map_err(|_| E::custom("amount out of range"))
                    .and_then(|v| self.visit_i64(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
                v.trim()
                    .parse::<f64>()
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
                    .and_then(|v| self.visit_f64(v))
            }
        }

        deserializer.deserialize_any(MoneyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99).cents(), 4999);
        assert_eq!(Money::from_decimal(0.1 + 0.2).cents(), 30);
        assert_eq!(Money::from_decimal(-5.0).cents(), -500);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(4999).display(), "$49.99");
        assert_eq!(Money::from_cents(5).display(), "$0.05");
        assert_eq!(Money::zero().display(), "$0.00");
        assert_eq!(Money::from_cents(-250).display(), "-$2.50");
    }

    #[test]
    fn test_display_amount_always_two_digits() {
        for cents in [0, 1, 10, 100, 3000, 123_456, -7] {
            let s = Money::from_cents(cents).display_amount();
            let (_, frac) = s.split_once('.').unwrap();
            assert_eq!(frac.len(), 2, "{s}");
        }
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_money_saturates() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!((max + Money::from_cents(1)).cents(), i64::MAX);
        assert_eq!(max.times(2).cents(), i64::MAX);
    }

    #[test]
    fn test_display_extreme_negative() {
        assert_eq!(Money::from_cents(i64::MIN).display(), "-$92233720368547758.08");
        assert_eq!(
            Money::from_cents(i64::MIN).display_amount(),
            "-92233720368547758.08"
        );
        // Saturates to i64::MIN instead of overflowing.
        assert!(Money::from_decimal(-1e300).display().starts_with("-$"));
    }

    #[test]
    fn test_serializes_as_decimal_number() {
        assert_eq!(serde_json::to_string(&Money::from_cents(1999)).unwrap(), "19.99");
        assert_eq!(serde_json::to_string(&Money::from_cents(1000)).unwrap(), "10");
    }

    #[test]
    fn test_deserializes_numbers_and_strings() {
        let m: Money = serde_json::from_str("19.99").unwrap();
        assert_eq!(m.cents(), 1999);
        let m: Money = serde_json::from_str("10").unwrap();
        assert_eq!(m.cents(), 1000);
        let m: Money = serde_json::from_str(r#""4.50""#).unwrap();
        assert_eq!(m.cents(), 450);
        assert!(serde_json::from_str::<Money>(r#""free""#).is_err());
    }
}
