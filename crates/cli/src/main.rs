//! Product store CLI - browse the catalog and manage the local cart.
//!
//! # Usage
//!
//! ```bash
//! # List products, filtered and sorted
//! store products --search shoe --category Shoes --sort price-asc
//!
//! # Show one product and add it to the cart
//! store product 3 --add-to-cart
//!
//! # Render whatever view a path points to
//! store open /cart
//!
//! # Change the cart
//! store cart add 3 --quantity 2
//! store cart dec 3
//! ```
//!
//! # Commands
//!
//! - `products` - List the catalog
//! - `categories` - List category names
//! - `product` - Show product details
//! - `open` - Render the view for a route path
//! - `cart` - Show or change the cart

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use product_store::AppState;
use product_store::catalog::SortOption;
use product_store::config::StoreConfig;
use product_store::views::Size;
use product_store_core::ProductId;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod notices;
mod render;

#[derive(Parser)]
#[command(name = "store")]
#[command(author, version, about = "Product store CLI")]
struct Cli {
    /// Catalog service base URL (overrides `STORE_API_URL`)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory holding the persisted cart (overrides `STORE_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Case-insensitive title search
        #[arg(short, long, default_value = "")]
        search: String,

        /// Exact category name
        #[arg(short, long)]
        category: Option<String>,

        /// Sort order (`none`, `price-asc`, `price-desc`, `rating-desc`)
        #[arg(long, default_value = "none")]
        sort: SortOption,
    },
    /// List category names found in the catalog
    Categories,
    /// Show product details
    Product {
        /// Product ID
        id: ProductId,

        /// Size to select (`S`, `M`, `L`, `XL`, `XXL`)
        #[arg(long, default_value = "M")]
        size: Size,

        /// Add one unit to the cart after showing it
        #[arg(long)]
        add_to_cart: bool,
    },
    /// Render the view for a route path (`/`, `/product/3`, `/cart`)
    Open {
        /// Route path
        path: String,
    },
    /// Show or change the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart
    Show,
    /// Add a product to the cart
    Add {
        /// Product ID
        id: ProductId,

        /// Units to add
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,
    },
    /// Set a line's quantity
    Set {
        /// Product ID
        id: ProductId,

        /// New quantity (must be at least 1)
        quantity: u32,
    },
    /// Add one unit to a line
    Inc {
        /// Product ID
        id: ProductId,
    },
    /// Remove one unit from a line, keeping at least one
    Dec {
        /// Product ID
        id: ProductId,
    },
    /// Remove a line
    Remove {
        /// Product ID
        id: ProductId,
    },
}

#[tokio::main]
async fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "product_store=info,product_store_cli=info".into());

    // Logs go to stderr; stdout carries the rendered views
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let output = match run(cli).await {
        Ok(output) => output,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = writeln!(std::io::stdout().lock(), "{output}") {
        tracing::error!("Failed to write output: {e}");
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> product_store::Result<StoreConfig> {
    let mut config = StoreConfig::from_env()?;
    if let Some(api_url) = &cli.api_url {
        config.catalog = config.catalog.with_base_url(api_url)?;
    }
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir.clone_from(data_dir);
    }
    Ok(config)
}

async fn run(cli: Cli) -> product_store::Result<String> {
    let config = load_config(&cli)?;
    let state = AppState::new(config)?;
    tracing::debug!(
        api_url = %state.config().catalog.base_url,
        data_dir = %state.config().data_dir.display(),
        "Store configured"
    );

    match cli.command {
        Commands::Products {
            search,
            category,
            sort,
        } => Ok(commands::catalog::products(&state, search, category, sort).await),
        Commands::Categories => Ok(commands::catalog::categories(&state).await),
        Commands::Product {
            id,
            size,
            add_to_cart,
        } => commands::catalog::product(&state, id, size, add_to_cart).await,
        Commands::Open { path } => commands::open::open(&state, &path).await,
        Commands::Cart { action } => match action {
            CartAction::Show => Ok(commands::cart::show(&state)),
            CartAction::Add { id, quantity } => commands::cart::add(&state, id, quantity).await,
            CartAction::Set { id, quantity } => commands::cart::set(&state, id, quantity),
            CartAction::Inc { id } => commands::cart::increment(&state, id),
            CartAction::Dec { id } => commands::cart::decrement(&state, id),
            CartAction::Remove { id } => commands::cart::remove(&state, id),
        },
    }
}
