//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use cart_checkout::{
    CheckoutPage, Document, Storefront, CART_COUNT_ID, CART_ITEMS_ID, ORDER_SUMMARY_ID,
};
use turbo_cache::{Cache, FileStore};
use turbo_commerce::cart::NoopObserver;
use turbo_commerce::CartManager;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::host::ConsoleHost;
use crate::output::Output;

/// Path of the page the CLI paints into.
pub const CHECKOUT_PAGE: &str = "/checkout.html";

/// The storefront as the CLI drives it.
pub type CliStorefront = Storefront<FileStore, Document, ConsoleHost>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Config file in use, if one was found.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            tracing::debug!(path = %path.display(), "config loaded");
        }

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(&config_path) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => tracing::warn!(
                            path = %config_path.display(),
                            error = %e,
                            "skipping config"
                        ),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory relative paths in the config are resolved against.
    pub fn base_dir(&self) -> PathBuf {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone())
    }

    /// The cart store file.
    pub fn store_path(&self) -> PathBuf {
        resolve(&self.base_dir(), &self.config.store.path)
    }

    /// Open the cart with no display attached.
    pub fn open_cart(&self) -> CartManager<FileStore> {
        let store = FileStore::open(self.store_path());
        CartManager::load(Cache::new(store), self.config.store.key.clone(), NoopObserver)
    }

    /// Open the cart wired to a checkout page and the terminal.
    pub fn storefront(&self) -> Result<CliStorefront> {
        let page = CheckoutPage::new(checkout_document(), self.config.policy()?);
        let store = FileStore::open(self.store_path());
        let cart = CartManager::load(Cache::new(store), self.config.store.key.clone(), page);

        let mut storefront = Storefront::new(
            cart,
            ConsoleHost::new(self.output.clone()),
            self.config.checkout_settings(),
        )
        .with_toast_duration(self.config.notification_duration());
        storefront.start();
        Ok(storefront)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

/// The elements the CLI checkout page carries.
pub fn checkout_document() -> Document {
    Document::new(CHECKOUT_PAGE)
        .with_element(CART_COUNT_ID)
        .with_element(CART_ITEMS_ID)
        .with_element(ORDER_SUMMARY_ID)
}

fn resolve(base: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        base.join(path)
    }
}
