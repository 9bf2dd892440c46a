//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core
//! services depend only on these traits, not on concrete store
//! implementations.

mod store;

pub use store::{OwnershipStore, StoreTx};
