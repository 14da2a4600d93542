//! Configuration management commands.

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Path => show_paths(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    let config = &ctx.config;

    ctx.output.info("[store]");
    ctx.output.kv("path", &config.store.path);
    ctx.output.kv("key", &config.store.key);

    ctx.output.info("[pricing]");
    ctx.output
        .kv("flat_shipping", &config.pricing.flat_shipping.to_string());
    ctx.output.kv("tax_rate", &config.pricing.tax_rate.to_string());

    ctx.output.info("[checkout]");
    ctx.output.kv("landing_page", &config.checkout.landing_page);
    ctx.output.kv(
        "redirect_delay_ms",
        &config.checkout.redirect_delay_ms.to_string(),
    );
    ctx.output.kv(
        "notification_ms",
        &config.checkout.notification_ms.to_string(),
    );

    if let Err(e) = config.policy() {
        ctx.output.warn(&format!("{:#}", e));
    }

    Ok(())
}

async fn show_paths(ctx: &Context) -> Result<()> {
    let config = ctx
        .config_path
        .as_ref()
        .map(|p| p.display().to_string());
    let store = ctx.store_path().display().to_string();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "config": config,
            "store": store,
        }));
        return Ok(());
    }

    match config {
        Some(path) => ctx.output.kv("config", &path),
        None => ctx.output.kv("config", "(none found, using defaults)"),
    }
    ctx.output.kv("store", &store);

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output
        .success(&format!("Created {}", config_path.display()));
    Ok(())
}
