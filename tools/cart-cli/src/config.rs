//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use turbo_commerce::{CheckoutSettings, PricingPolicy};

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["turbocart.toml", ".turbocart.toml", "turbocart.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the cart is stored.
    #[serde(default)]
    pub store: StoreConfig,

    /// Shipping and tax.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Order placement.
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Pricing policy, validated.
    pub fn policy(&self) -> Result<PricingPolicy> {
        PricingPolicy::from_decimal(self.pricing.flat_shipping, self.pricing.tax_rate)
            .context("Invalid [pricing] section")
    }

    /// Checkout settings.
    pub fn checkout_settings(&self) -> CheckoutSettings {
        CheckoutSettings {
            landing_page: self.checkout.landing_page.clone(),
            redirect_delay: Duration::from_millis(self.checkout.redirect_delay_ms),
        }
    }

    /// How long toasts stay up.
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.checkout.notification_ms)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "json")
}

/// Cart storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store file, relative to the config file's directory.
    #[serde(default = "default_store_path")]
    pub path: String,

    /// Key the cart is saved under.
    #[serde(default = "default_store_key")]
    pub key: String,
}

fn default_store_path() -> String {
    ".turbocart/store.json".to_string()
}

fn default_store_key() -> String {
    turbo_commerce::cart::DEFAULT_CART_KEY.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            key: default_store_key(),
        }
    }
}

/// Shipping and tax, as decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flat shipping fee for a non-empty order.
    #[serde(default = "default_flat_shipping")]
    pub flat_shipping: f64,

    /// Tax rate as a fraction (0.08 = 8%).
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
}

fn default_flat_shipping() -> f64 {
    5.99
}

fn default_tax_rate() -> f64 {
    0.08
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            flat_shipping: default_flat_shipping(),
            tax_rate: default_tax_rate(),
        }
    }
}

/// Order placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Page to go to after an order is placed.
    #[serde(default = "default_landing_page")]
    pub landing_page: String,

    /// Delay before that redirect.
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,

    /// How long add/remove notifications stay up.
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
}

fn default_landing_page() -> String {
    "index.html".to_string()
}

fn default_redirect_delay_ms() -> u64 {
    2000
}

fn default_notification_ms() -> u64 {
    3000
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            landing_page: default_landing_page(),
            redirect_delay_ms: default_redirect_delay_ms(),
            notification_ms: default_notification_ms(),
        }
    }
}

/// Generate a default turbocart.toml config file.
pub fn generate_default_config() -> String {
    r#"# TurboCart configuration

[store]
path = ".turbocart/store.json"
key = "ecommerce-cart"

[pricing]
flat_shipping = 5.99
tax_rate = 0.08

[checkout]
landing_page = "index.html"
redirect_delay_ms = 2000
notification_ms = 3000
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_matches_defaults() {
        let parsed: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, CliConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: CliConfig = toml::from_str("[pricing]\ntax_rate = 0.1\n").unwrap();
        assert_eq!(parsed.pricing.flat_shipping, 5.99);
        assert_eq!(parsed.store.key, "ecommerce-cart");
        assert_eq!(parsed.policy().unwrap().tax_rate_bp, 1000);
    }

    #[test]
    fn test_invalid_pricing_rejected() {
        let parsed: CliConfig = toml::from_str("[pricing]\ntax_rate = 8\n").unwrap();
        assert!(parsed.policy().is_err());
    }

    #[test]
    fn test_checkout_settings() {
        let settings = CliConfig::default().checkout_settings();
        assert_eq!(settings, CheckoutSettings::default());
        assert_eq!(
            CliConfig::default().notification_duration(),
            Duration::from_secs(3)
        );
    }
}
