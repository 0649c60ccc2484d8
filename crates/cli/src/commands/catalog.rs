//! Catalog commands.

use mercadito_cart::catalog::{Catalog, CatalogError};
use mercadito_cart::config::{CartConfig, ConfigError};
use thiserror::Error;
use tracing::info;

/// Errors that can occur during catalog commands.
#[derive(Debug, Error)]
pub enum CatalogCommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// List the catalog with ids and prices.
pub fn list() -> Result<(), CatalogCommandError> {
    let config = CartConfig::from_env()?;
    let catalog = Catalog::load(&config.catalog_path)?;

    if catalog.is_empty() {
        info!("Catalog is empty. Run 'mercadito seed' to create sample products.");
        return Ok(());
    }

    info!(
        "{} products in {}",
        catalog.len(),
        config.catalog_path.display()
    );
    for product in catalog.products() {
        info!("  [{}] {} - {}", product.id, product.title, product.price);
    }
    Ok(())
}
