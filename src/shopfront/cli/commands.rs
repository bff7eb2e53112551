//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the cart store and configuration
//! - `handle_*()`: Per-command handlers that call the API and render output

use super::render::{print_cart, print_categories, print_config, print_messages, print_products};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use shopfront::api::{CartStore, ConfigAction, ProductFilter};
use shopfront::catalog::{Catalog, JsonFileSource};
use shopfront::commands;
use shopfront::config::ShopConfig;
use shopfront::error::{Result, ShopError};
use shopfront::payment::DryRunGateway;
use shopfront::storage::fs::FileStorage;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HOME_ENV: &str = "SHOPFRONT_HOME";

struct AppContext {
    store: CartStore<FileStorage>,
    config: ShopConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir()?;

    // Config does not need the catalog or the cart.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&data_dir, key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli, data_dir)?;

    match cli.command {
        Some(Commands::List { category, search }) => handle_list(&ctx, category, search),
        Some(Commands::Search { term }) => handle_list(&ctx, None, Some(term)),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Add { id, quantity }) => handle_add(&mut ctx, id, quantity),
        Some(Commands::Buy { id }) => handle_buy(&mut ctx, id),
        Some(Commands::Change { id, delta }) => handle_change(&mut ctx, id, delta),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, id),
        Some(Commands::Cart) => handle_cart(&ctx),
        Some(Commands::Checkout) => handle_checkout(&mut ctx),
        // Handled before the store is opened.
        Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(&ctx, None, None),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "shopfront=debug"
    } else {
        "shopfront=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn resolve_data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "shopfront", "shopfront")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShopError::Config("Could not determine a data directory".to_string()))
}

fn init_context(cli: &Cli, data_dir: PathBuf) -> Result<AppContext> {
    let config = match ShopConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "invalid config, using defaults");
            ShopConfig::default()
        }
    };

    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.catalog));
    let catalog = Catalog::load_or_empty(&JsonFileSource::new(catalog_path));

    let store = CartStore::open(FileStorage::new(data_dir), catalog)
        .with_shipping_fee(config.shipping_fee)
        .with_currency_glyph(config.currency_glyph.clone());

    Ok(AppContext { store, config })
}

fn handle_list(ctx: &AppContext, category: Option<String>, search: Option<String>) -> Result<()> {
    let filter = ProductFilter { category, search };
    let result = ctx.store.list_products(&filter)?;
    print_products(&result.listed_products, &ctx.config.currency_glyph);
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    print_categories(&ctx.store.catalog().categories());
    Ok(())
}

fn handle_add(ctx: &mut AppContext, id: u32, quantity: u32) -> Result<()> {
    let result = ctx.store.add_item(id, quantity)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_buy(ctx: &mut AppContext, id: u32) -> Result<()> {
    let result = ctx.store.add_item(id, 1)?;
    print_messages(&result.messages);
    handle_cart(ctx)
}

fn handle_change(ctx: &mut AppContext, id: u32, delta: i64) -> Result<()> {
    let result = ctx.store.change_quantity(id, delta)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: u32) -> Result<()> {
    let result = ctx.store.remove_item(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_cart(ctx: &AppContext) -> Result<()> {
    let result = ctx.store.view_cart();
    render_cart_result(ctx, &result);
    Ok(())
}

fn handle_checkout(ctx: &mut AppContext) -> Result<()> {
    let mut gateway = DryRunGateway::approving();
    let result = ctx.store.checkout(&mut gateway)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(data_dir: &std::path::Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = commands::config::run(data_dir, action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn render_cart_result(ctx: &AppContext, result: &commands::CmdResult) {
    if let Some(totals) = &result.totals {
        print_cart(
            &result.cart_lines,
            totals,
            &ctx.config.currency_glyph,
            ctx.store.checkout_enabled(),
        );
    }
    print_messages(&result.messages);
}
