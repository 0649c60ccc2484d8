//! Mercadito Cart - the cart state container.
//!
//! This crate holds everything the storefront needs to run a shopping
//! cart: the pure state type and its transitions, the service that owns
//! the current state and writes it through a key-value store, the
//! file-backed store itself, the product catalog source, and the
//! environment configuration tying them together.
//!
//! # Modules
//!
//! - [`state`] - [`CartState`](state::CartState) and its pure transitions
//! - [`service`] - [`CartService`](service::CartService), the stateful container
//! - [`store`] - the [`KeyValueStore`](store::KeyValueStore) trait and its
//!   file and in-memory implementations
//! - [`catalog`] - read-only product catalog loaded from a JSON file
//! - [`config`] - environment-driven configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod service;
pub mod state;
pub mod store;
