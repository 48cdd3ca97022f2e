//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - reqwest HTTP client for the clientes REST collection
//! - In-memory demo data for demo mode

pub mod demo;
pub mod http;

#[cfg(test)]
pub mod mock_server;
