//! Core domain entities
//!
//! Pure data structures and validation logic - no I/O or external
//! dependencies.

pub mod result;
pub mod tables;
mod user;

pub use user::User;
