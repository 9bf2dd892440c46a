//! Doctor service - database pre-flight checks

use serde::Serialize;

use crate::domain::result::Result;
use crate::domain::tables::OWNED_TABLES;
use crate::ports::{OwnershipStore, StoreTx};

/// Doctor service for read-only pre-flight checks
///
/// Lets an operator verify the store before a reassignment run instead
/// of discovering a missing table mid-operation.
pub struct DoctorService<S: OwnershipStore> {
    store: S,
}

impl<S: OwnershipStore> DoctorService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Run all checks; never mutates the store
    pub fn run_checks(&mut self) -> Result<DoctorResult> {
        let mut checks = Vec::new();
        let mut tx = self.store.begin()?;

        // Identity table and at least one identity to own data
        let users_missing = tx.missing_tables(&["users"])?;
        if users_missing.is_empty() {
            match tx.first_user()? {
                Some(user) => checks.push(CheckResult::pass(
                    "identities",
                    format!("users table present; lowest id is {} ({})", user.id, user.email),
                )),
                None => checks.push(CheckResult::error(
                    "identities",
                    "users table is empty; nothing can own data".to_string(),
                )),
            }
        } else {
            checks.push(CheckResult::error(
                "identities",
                "users table missing from schema".to_string(),
            ));
        }

        // Every owned table present in the live schema
        let missing = tx.missing_tables(&OWNED_TABLES)?;
        if missing.is_empty() {
            checks.push(CheckResult::pass(
                "owned_tables",
                format!("all {} owned tables present", OWNED_TABLES.len()),
            ));
        } else {
            checks.push(CheckResult::error(
                "owned_tables",
                format!("missing from schema: {}", missing.join(", ")),
            ));
        }

        // Read-only: the transaction is dropped, never committed.
        drop(tx);

        let passed = checks.iter().filter(|c| c.status == "pass").count() as i64;
        let errors = checks.iter().filter(|c| c.status == "error").count() as i64;

        Ok(DoctorResult {
            checks,
            summary: DoctorSummary { passed, errors },
        })
    }
}

#[derive(Debug, Serialize)]
pub struct DoctorResult {
    pub checks: Vec<CheckResult>,
    pub summary: DoctorSummary,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub status: String,
    pub message: String,
}

impl CheckResult {
    fn pass(name: &str, message: String) -> Self {
        Self {
            name: name.to_string(),
            status: "pass".to_string(),
            message,
        }
    }

    fn error(name: &str, message: String) -> Self {
        Self {
            name: name.to_string(),
            status: "error".to_string(),
            message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DoctorSummary {
    pub passed: i64,
    pub errors: i64,
}
