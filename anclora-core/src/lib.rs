//! Anclora Flow Core - business logic for data administration
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core entities (User, the owned-table registry, errors)
//! - **ports**: Trait definitions for the backing store
//! - **services**: Business logic orchestration (reassignment, doctor)
//! - **adapters**: Concrete implementations (PostgreSQL, in-memory)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types at crate root
pub use config::DbConfig;
pub use domain::result::{Error, Result};
pub use domain::tables::OWNED_TABLES;
pub use domain::User;
pub use services::{
    CheckResult, DoctorResult, DoctorService, DoctorSummary, OwnershipService, ReassignReport,
    ReassignRequest, TableCount,
};
