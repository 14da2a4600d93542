//! TurboCart CLI - A storefront cart from the command line.
//!
//! Commands:
//! - `turbocart add` - Add a product to the cart
//! - `turbocart remove` - Remove every line item of a product
//! - `turbocart update` - Set the quantity of a product
//! - `turbocart list` - Show the line items
//! - `turbocart summary` - Show the order totals
//! - `turbocart clear` - Empty the cart
//! - `turbocart checkout` - Place the order
//! - `turbocart render` - Write the checkout page markup
//! - `turbocart config` - Manage configuration

mod commands;
mod config;
mod context;
mod host;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    AddArgs, CheckoutArgs, ClearArgs, ConfigArgs, RemoveArgs, RenderArgs, UpdateArgs,
};

/// TurboCart - Manage a persistent storefront cart
#[derive(Parser)]
#[command(name = "turbocart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a product to the cart
    Add(AddArgs),

    /// Remove every line item of a product
    Remove(RemoveArgs),

    /// Set the quantity of a product (0 or less removes it)
    Update(UpdateArgs),

    /// List the line items
    List,

    /// Show subtotal, shipping, tax and total
    Summary,

    /// Empty the cart
    Clear(ClearArgs),

    /// Place an order for everything in the cart
    Checkout(CheckoutArgs),

    /// Write the checkout page markup
    Render(RenderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Add(args) => commands::cart::add(args, &ctx).await,
        Commands::Remove(args) => commands::cart::remove(args, &ctx).await,
        Commands::Update(args) => commands::cart::update(args, &ctx).await,
        Commands::List => commands::show::list(&ctx).await,
        Commands::Summary => commands::show::summary(&ctx).await,
        Commands::Clear(args) => commands::cart::clear(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
