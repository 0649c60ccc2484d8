//! Integration tests for Mercadito.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mercadito-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_operations` - Cart behavior end to end over an in-memory store
//! - `cart_persistence` - Write-through behavior and reload across
//!   simulated restarts over the file-backed store
//!
//! The tests need no network and no external services; file-backed cases
//! run inside temporary directories.
