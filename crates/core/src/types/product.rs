//! Product catalog record.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// A product as listed in the catalog.
///
/// Adding a product to a cart snapshots these fields onto the cart line;
/// later catalog edits do not reach back into an existing line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Short copy shown on product cards.
    pub description: String,
    /// Image URL or path, if the product has one.
    #[serde(default)]
    pub image: Option<String>,
    /// Unit price.
    pub price: Price,
}
