//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The form logic
//! depends only on these traits, not on concrete implementations.

mod customer_api;

pub use customer_api::CustomerApi;
