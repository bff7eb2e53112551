use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shopfront", bin_name = "shopfront", version)]
#[command(about = "Browse a product catalog and manage a shopping cart", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Product catalog (JSON). Defaults to the `catalog` config value
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products
    #[command(alias = "ls")]
    List {
        /// Only show this category ("all" shows everything)
        #[arg(short, long)]
        category: Option<String>,

        /// Search term (name, category or description)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search products (dedicated command)
    Search { term: String },

    /// List the catalog's categories
    Categories,

    /// Add a product to the cart
    #[command(alias = "a")]
    Add {
        /// Product id
        id: u32,

        /// Number of units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },

    /// Add one unit of a product and show the cart
    Buy {
        /// Product id
        id: u32,
    },

    /// Change the quantity of a cart line by a signed amount (e.g. 1 or -1)
    #[command(alias = "qty")]
    Change {
        /// Product id
        id: u32,

        /// Amount to add; negative to reduce
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },

    /// Remove a product from the cart
    #[command(alias = "rm")]
    Remove {
        /// Product id
        id: u32,
    },

    /// Show the cart and its totals
    #[command(alias = "c")]
    Cart,

    /// Pay for the cart
    Checkout,

    /// Get or set configuration
    Config {
        /// Configuration key (shipping-fee, currency-glyph, catalog)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
