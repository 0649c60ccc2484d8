//! Read-only product catalog.
//!
//! The catalog is a JSON array of products loaded into memory at startup.
//! The cart snapshots whatever it needs from a product at add time, so the
//! catalog file can be edited or reseeded without touching existing carts.

use std::path::Path;

use mercadito_core::{Product, ProductId};
use thiserror::Error;

/// Product catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog from a JSON file holding an array of products.
    ///
    /// Duplicate ids keep the first occurrence; later ones are dropped with
    /// a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse as a
    /// product array.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        let entries: Vec<Product> =
            serde_json::from_str(&raw).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut products: Vec<Product> = Vec::with_capacity(entries.len());
        for entry in entries {
            if products.iter().any(|p| p.id == entry.id) {
                tracing::warn!(
                    "Duplicate product id {} in {}, keeping the first",
                    entry.id,
                    path.display()
                );
                continue;
            }
            products.push(entry);
        }

        tracing::info!("Loaded {} products from {}", products.len(), path.display());

        Ok(Self { products })
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in file order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}
