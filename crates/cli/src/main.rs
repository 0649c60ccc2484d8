//! Mercadito CLI - catalog browsing and cart management.
//!
//! # Usage
//!
//! ```bash
//! # Seed a sample catalog
//! mercadito seed --count 12
//!
//! # Browse the catalog
//! mercadito catalog list
//!
//! # Work the cart
//! mercadito cart add 3
//! mercadito cart show
//! mercadito cart set-quantity 3 5
//! mercadito cart remove 3
//! mercadito cart clear
//! ```
//!
//! # Commands
//!
//! - `cart` - Show and mutate the persistent cart
//! - `catalog` - Inspect the product catalog
//! - `seed` - Write a sample catalog file

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mercadito")]
#[command(author, version, about = "Mercadito storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show and mutate the persistent cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Inspect the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Write a sample catalog file
    Seed {
        /// Number of products to generate
        #[arg(short, long, default_value_t = 12)]
        count: usize,

        /// Overwrite an existing catalog file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// List cart lines with the item count and cart total
    Show,
    /// Add one unit of a product from the catalog
    Add {
        /// Product id to add
        product_id: i32,
    },
    /// Remove a product's line from the cart
    Remove {
        /// Product id to remove
        product_id: i32,
    },
    /// Set the quantity of a product's line
    SetQuantity {
        /// Product id to change
        product_id: i32,

        /// New quantity (negative values clamp to zero)
        #[arg(allow_hyphen_values = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List the catalog with ids and prices
    List,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show()?,
            CartAction::Add { product_id } => commands::cart::add(product_id)?,
            CartAction::Remove { product_id } => commands::cart::remove(product_id)?,
            CartAction::SetQuantity {
                product_id,
                quantity,
            } => commands::cart::set_quantity(product_id, quantity)?,
            CartAction::Clear => commands::cart::clear()?,
        },
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list()?,
        },
        Commands::Seed { count, force } => commands::seed::catalog(count, force)?,
    }
    Ok(())
}
