//! Persistence behavior of the cart over the file-backed store.
//!
//! Restarts are simulated by dropping a service and building a fresh one
//! over the same directory; the cart must come back exactly as it was
//! left. A store that cannot be read or written must never disturb the
//! in-memory cart.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use mercadito_cart::service::CartService;
use mercadito_cart::state::CartItem;
use mercadito_cart::store::{CART_KEY, FileStore, KeyValueStore, StoreError};
use mercadito_core::{Price, Product, ProductId};
use rust_decimal::Decimal;

fn product(id: i32, cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        description: format!("Description {id}"),
        image: Some(format!("/images/products/{id}.jpg")),
        price: Price::new(Decimal::new(cents, 2)).unwrap(),
    }
}

fn cart_file(dir: &Path) -> std::path::PathBuf {
    dir.join(CART_KEY)
}

// =============================================================================
// Restart round-trips
// =============================================================================

#[test]
fn test_cart_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    let left_behind: Vec<CartItem> = {
        let store = FileStore::open(dir.path()).unwrap();
        let mut service = CartService::new(store);
        service.add_item(&product(3, 1250));
        service.add_item(&product(1, 499));
        service.add_item(&product(3, 1250));
        service.items().to_vec()
    };

    let store = FileStore::open(dir.path()).unwrap();
    let service = CartService::new(store);

    assert_eq!(service.items(), left_behind.as_slice());
    assert_eq!(service.item_count(), 3);
    assert_eq!(service.cart_total(), Decimal::new(2999, 2));
}

#[test]
fn test_restart_preserves_insertion_order() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileStore::open(dir.path()).unwrap();
        let mut service = CartService::new(store);
        for id in [5, 2, 9, 1] {
            service.add_item(&product(id, 100));
        }
    }

    let store = FileStore::open(dir.path()).unwrap();
    let service = CartService::new(store);
    let ids: Vec<i32> = service.items().iter().map(|i| i.id.as_i32()).collect();
    assert_eq!(ids, vec![5, 2, 9, 1]);
}

#[test]
fn test_mutations_after_restart_continue_the_same_cart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileStore::open(dir.path()).unwrap();
        let mut service = CartService::new(store);
        service.add_item(&product(1, 1000));
    }

    let store = FileStore::open(dir.path()).unwrap();
    let mut service = CartService::new(store);
    service.add_item(&product(1, 1000));

    assert_eq!(service.items().first().unwrap().quantity, 2);
}

// =============================================================================
// Startup edge cases
// =============================================================================

#[test]
fn test_empty_directory_starts_empty_and_reads_do_not_write() {
    let dir = tempfile::tempdir().unwrap();

    let store = FileStore::open(dir.path()).unwrap();
    let service = CartService::new(store);

    assert!(service.items().is_empty());
    assert_eq!(service.item_count(), 0);

    // Construction and reads alone must not create the cart file.
    assert!(!cart_file(dir.path()).exists());
}

#[test]
fn test_corrupt_cart_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(cart_file(dir.path()), "{ definitely not a cart").unwrap();

    let store = FileStore::open(dir.path()).unwrap();
    let service = CartService::new(store);

    assert!(service.items().is_empty());
}

#[test]
fn test_first_mutation_overwrites_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(cart_file(dir.path()), "{ definitely not a cart").unwrap();

    let store = FileStore::open(dir.path()).unwrap();
    let mut service = CartService::new(store);
    service.add_item(&product(1, 1000));

    let raw = std::fs::read_to_string(cart_file(dir.path())).unwrap();
    let stored: Vec<CartItem> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.len(), 1);
}

// =============================================================================
// Write-through
// =============================================================================

#[test]
fn test_every_mutation_rewrites_the_cart_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    let mut service = CartService::new(store);

    service.add_item(&product(1, 1000));
    let after_add = std::fs::read_to_string(cart_file(dir.path())).unwrap();

    service.update_quantity(ProductId::new(1), 3);
    let after_update = std::fs::read_to_string(cart_file(dir.path())).unwrap();
    assert_ne!(after_add, after_update);

    service.clear_cart();
    let after_clear = std::fs::read_to_string(cart_file(dir.path())).unwrap();
    assert_eq!(after_clear, "[]");
}

#[test]
fn test_stored_payload_is_the_items_array() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    let mut service = CartService::new(store);

    service.add_item(&product(7, 1895));
    service.add_item(&product(7, 1895));

    let raw = std::fs::read_to_string(cart_file(dir.path())).unwrap();
    let stored: Vec<CartItem> = serde_json::from_str(&raw).unwrap();

    let line = stored.first().unwrap();
    assert_eq!(line.id, ProductId::new(7));
    assert_eq!(line.title, "Product 7");
    assert_eq!(line.quantity, 2);
    assert_eq!(line.price, Price::new(Decimal::new(1895, 2)).unwrap());
}

// =============================================================================
// Best-effort persistence
// =============================================================================

/// A store implemented outside the cart crate whose writes always fail.
struct BrokenDisk;

impl KeyValueStore for BrokenDisk {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io(std::io::Error::other("write refused")))
    }
}

#[test]
fn test_failed_writes_cost_durability_not_correctness() {
    let mut service = CartService::new(BrokenDisk);

    service.add_item(&product(1, 1000));
    service.add_item(&product(2, 500));
    service.update_quantity(ProductId::new(2), 4);

    let ids: Vec<(i32, u32)> = service
        .items()
        .iter()
        .map(|i| (i.id.as_i32(), i.quantity))
        .collect();
    assert_eq!(ids, vec![(1, 1), (2, 4)]);
    assert_eq!(service.cart_total(), Decimal::new(3000, 2));
}
