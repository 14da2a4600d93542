//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod render;
pub mod show;

use clap::{Args, Subcommand};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product ID.
    pub id: String,

    /// Product name.
    pub name: String,

    /// Unit price (e.g. 24.99).
    pub price: f64,

    /// Quantity to add.
    #[arg(short, long, default_value = "1")]
    pub quantity: u32,

    /// Size variant.
    #[arg(short, long)]
    pub size: Option<String>,

    /// Color variant.
    #[arg(long)]
    pub color: Option<String>,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Product ID.
    pub id: String,

    /// New quantity; 0 or less removes the product.
    #[arg(allow_negative_numbers = true)]
    pub quantity: i64,
}

/// Arguments for the clear command.
#[derive(Args)]
pub struct ClearArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Don't wait out the redirect delay.
    #[arg(long)]
    pub no_wait: bool,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Output file.
    #[arg(short, long, default_value = "checkout.html")]
    pub output: String,

    /// Print to stdout instead of writing a file.
    #[arg(long)]
    pub stdout: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Show which config and store files are in use.
    Path,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
