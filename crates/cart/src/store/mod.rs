//! Persistent key-value storage for cart data.
//!
//! The cart only ever needs two operations from its storage: read a value
//! back if one is present, and replace the value under a key. The
//! [`KeyValueStore`] trait captures exactly that, so the container never
//! learns whether it is talking to a file, a map in memory, or something
//! else entirely.

use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// The key the cart is stored under. Everything the container persists
/// lives under this one key.
pub const CART_KEY: &str = "cart";

/// Errors that can occur when writing to a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key contains characters the store cannot accept.
    #[error("invalid store key {key:?}: keys may only contain ASCII letters, digits, '_' and '-'")]
    InvalidKey {
        /// The rejected key.
        key: String,
    },

    /// The underlying storage failed.
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A string-keyed, string-valued store.
///
/// Reads are infallible from the caller's point of view: a missing key and
/// a value that cannot be read both come back as `None`, and
/// implementations log anything worth knowing about. Writes report
/// failure, leaving it to the caller how much to care.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if there is one and it can be
    /// read.
    fn read(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be durably stored.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}
