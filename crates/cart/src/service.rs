//! The cart state container.
//!
//! [`CartService`] owns the current [`CartState`] and the store it is
//! persisted through. Mutations apply a pure transition, install the
//! result, then write it out. Persistence is best-effort: the in-memory
//! state is authoritative, and a store that cannot be read or written
//! costs durability, never correctness.

use mercadito_core::{Product, ProductId};
use rust_decimal::Decimal;

use crate::state::{CartItem, CartState};
use crate::store::{CART_KEY, KeyValueStore};

/// Shopping cart backed by a key-value store.
///
/// One instance per storefront session, constructed explicitly and handed
/// to whoever needs it. Mutations take `&mut self`, so two writers cannot
/// share an instance without external coordination.
#[derive(Debug)]
pub struct CartService<S: KeyValueStore> {
    store: S,
    state: CartState,
}

impl<S: KeyValueStore> CartService<S> {
    /// Build a service over `store`, seeding state from the value under
    /// [`CART_KEY`].
    ///
    /// A missing value starts an empty cart. A value that does not parse
    /// as a cart logs a warning and also starts empty; the stored value
    /// stays as it is until the next mutation overwrites it.
    #[must_use]
    pub fn new(store: S) -> Self {
        let state = match store.read(CART_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<CartItem>>(&raw) {
                Ok(items) => CartState::from_items(items),
                Err(e) => {
                    tracing::warn!("Stored cart is unreadable, starting empty: {e}");
                    CartState::default()
                }
            },
            None => CartState::default(),
        };

        Self { store, state }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add one unit of `product`.
    ///
    /// A product already in the cart gains a unit on its existing line;
    /// that line keeps the snapshot taken when the product was first
    /// added.
    pub fn add_item(&mut self, product: &Product) {
        self.apply(self.state.with_item_added(product));
    }

    /// Remove the line for `id`, if there is one.
    pub fn remove_item(&mut self, id: ProductId) {
        self.apply(self.state.with_item_removed(id));
    }

    /// Set the quantity of the line for `id`.
    ///
    /// Negative values clamp to zero, and a quantity of zero removes the
    /// line. Unknown ids leave the cart unchanged.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        self.apply(self.state.with_quantity(id, quantity));
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.apply(CartState::default());
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Current cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        self.state.items()
    }

    /// Total units across all lines. Recomputed per call.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.state.item_count()
    }

    /// Sum of all line totals. Recomputed per call.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.state.cart_total()
    }

    /// Install `next` as the current state and persist it. The new state
    /// is kept whether or not the write succeeds.
    fn apply(&mut self, next: CartState) {
        self.state = next;
        self.persist();
    }

    fn persist(&self) {
        match serde_json::to_string(self.state.items()) {
            Ok(payload) => {
                if let Err(e) = self.store.write(CART_KEY, &payload) {
                    tracing::error!("Failed to persist cart: {e}");
                }
            }
            Err(e) => tracing::error!("Failed to serialize cart: {e}"),
        }
    }
}
