//! Pure cart state and its transitions.
//!
//! [`CartState`] is a plain value. Every transition returns a new state and
//! leaves the receiver untouched; whoever owns the state decides when a
//! transition result becomes current. The aggregates (item count, cart
//! total) are recomputed from the lines on every read, so they can never
//! drift out of sync with them.

use mercadito_core::{Price, Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One cart line: a product snapshot plus a quantity.
///
/// The snapshot fields are frozen copies of the product as it was when
/// first added; catalog edits after that point do not show up here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product this line refers to.
    pub id: ProductId,
    /// Title at the time of the first add.
    pub title: String,
    /// Description at the time of the first add.
    pub description: String,
    /// Image at the time of the first add.
    #[serde(default)]
    pub image: Option<String>,
    /// Unit price at the time of the first add.
    pub price: Price,
    /// Units of this product in the cart. Stored lines are never at zero.
    pub quantity: u32,
}

impl CartItem {
    /// A line holding one unit of `product`.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.amount() * Decimal::from(self.quantity)
    }
}

/// The cart: an ordered list of lines, at most one per product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    /// A state holding exactly `items`, taken as-is.
    #[must_use]
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The state after adding one unit of `product`.
    ///
    /// A product already present gains a unit on its existing line and
    /// keeps that line's snapshot fields; anything else is appended as a
    /// fresh line of one unit.
    #[must_use]
    pub fn with_item_added(&self, product: &Product) -> Self {
        let mut items = self.items.clone();
        if let Some(line) = items.iter_mut().find(|item| item.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            items.push(CartItem::from_product(product));
        }
        Self { items }
    }

    /// The state after removing the line for `id`.
    ///
    /// Unknown ids change nothing.
    #[must_use]
    pub fn with_item_removed(&self, id: ProductId) -> Self {
        let items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        Self { items }
    }

    /// The state after setting the quantity of the line for `id`.
    ///
    /// Negative quantities clamp to zero, and a line at zero is dropped
    /// rather than stored. Unknown ids change nothing.
    #[must_use]
    pub fn with_quantity(&self, id: ProductId, quantity: i64) -> Self {
        let quantity = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
        let items = self
            .items
            .iter()
            .filter_map(|item| {
                if item.id != id {
                    return Some(item.clone());
                }
                (quantity > 0).then(|| {
                    let mut line = item.clone();
                    line.quantity = quantity;
                    line
                })
            })
            .collect();
        Self { items }
    }

    /// Total units across all lines. Recomputed on every call.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of all line totals. Recomputed on every call.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }
}
