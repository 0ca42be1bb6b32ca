//! Herbloom CLI - Catalog inspection and demo shopping sessions.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog, optionally narrowed to one category
//! herbloom products list
//! herbloom products list --category Teas
//!
//! # Search products by name or description
//! herbloom products search lavender
//!
//! # Show one product in full
//! herbloom products show 2
//!
//! # Run a scripted shopping session end to end
//! herbloom demo
//! ```
//!
//! # Environment
//!
//! Honors the storefront configuration variables
//! (`HERBLOOM_SHIPPING_FLAT_FEE`, `HERBLOOM_FREE_SHIPPING_THRESHOLD`,
//! `HERBLOOM_CATALOG_PATH`); see `herbloom-storefront`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use herbloom_storefront::{AppState, Catalog, StorefrontConfig};

mod commands;

#[derive(Parser)]
#[command(name = "herbloom")]
#[command(author, version, about = "Herbloom storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Run a scripted shopping session
    Demo,
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products
    List {
        /// Only show products in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Search products by name or description
    Search {
        /// Search query (case-insensitive substring)
        query: String,
    },
    /// Show one product in full
    Show {
        /// Product ID
        id: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::sample()?,
    };
    let state = AppState::new(config, catalog);

    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List { category } => {
                commands::products::list(&state, category.as_deref());
            }
            ProductsAction::Search { query } => commands::products::search(&state, &query),
            ProductsAction::Show { id } => commands::products::show(&state, &id)?,
        },
        Commands::Demo => commands::demo::run(&state)?,
    }
    Ok(())
}
