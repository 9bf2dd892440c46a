//! Adapter implementations
//!
//! Adapters implement the store port with concrete technologies:
//! - PostgreSQL for live deployments
//! - In-memory store for tests and demos

pub mod memory;
pub mod postgres;
