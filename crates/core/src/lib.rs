//! Mercadito Core - Shared types library.
//!
//! This crate provides common types used across all Mercadito components:
//! - `cart` - Cart state container, persistence, and catalog access
//! - `cli` - Command-line storefront for browsing and cart management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! environment reads. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus the
//!   product record consumed by the cart

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
