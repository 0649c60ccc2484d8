//! Cart commands: show, add, remove, set-quantity, clear.
//!
//! Every invocation builds the cart service over the file-backed store,
//! applies one operation, and reports the resulting cart. The cart file
//! lives under `MERCADITO_DATA_DIR`.

use mercadito_cart::catalog::{Catalog, CatalogError};
use mercadito_cart::config::{CartConfig, ConfigError};
use mercadito_cart::service::CartService;
use mercadito_cart::store::{FileStore, StoreError};
use mercadito_core::ProductId;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during cart commands.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The store directory could not be opened.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The product id is not in the catalog.
    #[error("No product with id {0} in the catalog")]
    UnknownProduct(ProductId),
}

/// Print the current cart.
pub fn show() -> Result<(), CartCommandError> {
    let config = CartConfig::from_env()?;
    let service = open_service(&config)?;
    report(&service);
    Ok(())
}

/// Add one unit of the catalog product with `id`.
pub fn add(id: i32) -> Result<(), CartCommandError> {
    let config = CartConfig::from_env()?;
    let catalog = Catalog::load(&config.catalog_path)?;
    let id = ProductId::new(id);
    let product = catalog.get(id).ok_or(CartCommandError::UnknownProduct(id))?;

    let mut service = open_service(&config)?;
    service.add_item(product);
    info!("Added {}", product.title);
    report(&service);
    Ok(())
}

/// Remove the line for `id` from the cart. Unknown ids are a no-op.
pub fn remove(id: i32) -> Result<(), CartCommandError> {
    let config = CartConfig::from_env()?;
    let mut service = open_service(&config)?;
    service.remove_item(ProductId::new(id));
    report(&service);
    Ok(())
}

/// Set the quantity of the line for `id`. Negative values clamp to zero,
/// and zero removes the line.
pub fn set_quantity(id: i32, quantity: i64) -> Result<(), CartCommandError> {
    let config = CartConfig::from_env()?;
    let mut service = open_service(&config)?;
    service.update_quantity(ProductId::new(id), quantity);
    report(&service);
    Ok(())
}

/// Empty the cart.
pub fn clear() -> Result<(), CartCommandError> {
    let config = CartConfig::from_env()?;
    let mut service = open_service(&config)?;
    service.clear_cart();
    info!("Cart cleared");
    Ok(())
}

fn open_service(config: &CartConfig) -> Result<CartService<FileStore>, CartCommandError> {
    let store = FileStore::open(&config.data_dir)?;
    Ok(CartService::new(store))
}

/// Print the lines in insertion order, then the item count and cart total.
fn report(service: &CartService<FileStore>) {
    if service.items().is_empty() {
        info!("Cart is empty");
        return;
    }

    for item in service.items() {
        info!(
            "  [{}] {} x{} @ {} = €{:.2}",
            item.id,
            item.title,
            item.quantity,
            item.price,
            item.line_total()
        );
    }
    info!("Items: {}", service.item_count());
    info!("Total: €{:.2}", service.cart_total());
}
