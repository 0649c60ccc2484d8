//! Seed a sample product catalog.
//!
//! Writes a JSON catalog of Spanish market staples so the storefront has
//! something to sell out of the box. Generation is deterministic: the same
//! count always produces the same file.

use mercadito_cart::config::{CartConfig, ConfigError};
use mercadito_core::{Price, PriceError, Product, ProductId};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

/// Sample products as (title, description) pairs. Counts beyond the pool
/// fall back to generated names.
const SAMPLE_PRODUCTS: &[(&str, &str)] = &[
    (
        "Aceite de oliva virgen extra",
        "Botella de 500 ml, primera presión en frío",
    ),
    ("Miel de romero", "Tarro de 250 g de la sierra"),
    (
        "Queso manchego curado",
        "Cuña de 200 g, doce meses de maduración",
    ),
    ("Chorizo ibérico", "Pieza de 300 g, curado al aire"),
    ("Pimentón de la Vera", "Lata de 75 g, ahumado dulce"),
    ("Turrón de almendra", "Tableta de 200 g, calidad suprema"),
    ("Vino tinto crianza", "Botella de 75 cl, tempranillo"),
    ("Arroz bomba", "Saco de 1 kg para paella"),
    ("Azafrán en hebras", "Estuche de 1 g"),
    ("Almendras marcona", "Bolsa de 250 g, tostadas"),
    ("Aceitunas gordal", "Tarro de 350 g, aliñadas"),
    (
        "Mermelada de naranja amarga",
        "Tarro de 280 g artesano",
    ),
];

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The catalog file exists and `--force` was not given.
    #[error("Catalog already exists at {0}; pass --force to overwrite")]
    AlreadyExists(String),

    /// A generated price is invalid.
    #[error("Invalid generated price: {0}")]
    Price(#[from] PriceError),

    /// The file could not be written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog could not be serialized.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write `count` sample products to the configured catalog path.
pub fn catalog(count: usize, force: bool) -> Result<(), SeedError> {
    let config = CartConfig::from_env()?;
    let path = &config.catalog_path;

    if path.exists() && !force {
        return Err(SeedError::AlreadyExists(path.display().to_string()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let products = sample_products(count)?;
    let json = serde_json::to_string_pretty(&products)?;
    std::fs::write(path, json)?;

    info!("Seeded {} products into {}", products.len(), path.display());
    Ok(())
}

/// Build `count` sample products with ids starting at 1.
fn sample_products(count: usize) -> Result<Vec<Product>, PriceError> {
    (0..count)
        .map(|index| {
            let number = index.saturating_add(1);
            let id = i32::try_from(number).unwrap_or(i32::MAX);
            let (title, description) = match SAMPLE_PRODUCTS.get(index) {
                Some(&(title, description)) => (title.to_owned(), description.to_owned()),
                None => (
                    format!("Producto de temporada {number}"),
                    "Selección del mercado".to_owned(),
                ),
            };

            // Prices stay within 3.75..=24.45.
            let cents = 375 + 230 * (i64::try_from(index).unwrap_or(0) % 10);

            Ok(Product {
                id: ProductId::new(id),
                title,
                description,
                image: Some(format!("/images/products/{number}.jpg")),
                price: Price::new(Decimal::new(cents, 2))?,
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_products_are_deterministic() {
        let first = sample_products(5).unwrap();
        let second = sample_products(5).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sample_products_ids_start_at_one_and_are_unique() {
        let products = sample_products(20).unwrap();
        let ids: Vec<i32> = products.iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<i32>>());
    }

    #[test]
    fn test_sample_products_beyond_pool_get_generated_names() {
        let products = sample_products(SAMPLE_PRODUCTS.len() + 2).unwrap();
        let last = products.last().unwrap();
        assert!(last.title.starts_with("Producto de temporada"));
    }

    #[test]
    fn test_sample_products_serialize_as_catalog() {
        let products = sample_products(3).unwrap();
        let json = serde_json::to_string_pretty(&products).unwrap();
        let parsed: Vec<Product> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, products);
    }
}
