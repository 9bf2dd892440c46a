//! Ownership service - atomic transfer of owned rows between identities

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::tables;
use crate::domain::User;
use crate::ports::{OwnershipStore, StoreTx};

/// Parameters of one reassignment run
#[derive(Debug, Clone)]
pub struct ReassignRequest {
    /// Email of the identity that should own the data afterwards
    pub target_email: String,
    /// Email of the identity currently owning the data; inferred from
    /// the lowest-id user when absent
    pub source_email: Option<String>,
    /// Requested subset of the owned tables; empty means all
    pub tables: Vec<String>,
    /// Report counts without applying any update
    pub dry_run: bool,
}

/// Ownership service for reassignment runs
pub struct OwnershipService<S: OwnershipStore> {
    store: S,
}

impl<S: OwnershipStore> OwnershipService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Transfer every owned row from the source identity to the target
    ///
    /// Runs as a single transaction: either every table's update is
    /// durably applied or none is. The report lists rows moved per table
    /// in registry order.
    pub fn reassign(&mut self, request: &ReassignRequest) -> Result<ReassignReport> {
        if request.target_email.trim().is_empty() {
            return Err(Error::validation("target email must not be empty"));
        }
        let tables = tables::resolve_tables(&request.tables)?;

        let mut tx = self.store.begin()?;

        let target = tx.user_by_email(&request.target_email)?.ok_or_else(|| {
            Error::not_found(format!("no user with email {}", request.target_email))
        })?;

        let (source, source_inferred) = match &request.source_email {
            Some(email) => {
                let user = tx
                    .user_by_email(email)?
                    .ok_or_else(|| Error::not_found(format!("no user with email {}", email)))?;
                (user, false)
            }
            None => {
                let user = tx
                    .first_user()?
                    .ok_or_else(|| Error::not_found("no users exist in the store"))?;
                (user, true)
            }
        };

        if source.id == target.id {
            // Nothing to move; the open transaction is dropped unused.
            return Ok(ReassignReport::no_op(
                target,
                source_inferred,
                &tables,
                request.dry_run,
            ));
        }

        let missing = tx.missing_tables(&tables)?;
        if !missing.is_empty() {
            return Err(Error::validation(format!(
                "table(s) missing from schema: {}",
                missing.join(", ")
            )));
        }

        let mut moved = Vec::with_capacity(tables.len());
        for table in &tables {
            let rows = if request.dry_run {
                tx.count_owned(table, source.id)?
            } else {
                tx.reassign_table(table, source.id, target.id)?
            };
            moved.push(TableCount {
                table: (*table).to_string(),
                rows,
            });
        }

        if !request.dry_run {
            tx.commit()?;
        }

        let total_rows = moved.iter().map(|entry| entry.rows).sum();
        Ok(ReassignReport {
            target,
            source,
            source_inferred,
            no_op: false,
            dry_run: request.dry_run,
            tables: moved,
            total_rows,
        })
    }
}

/// Outcome of a reassignment run
#[derive(Debug, Serialize)]
pub struct ReassignReport {
    pub target: User,
    pub source: User,
    /// True when the source was inferred rather than named by the operator
    pub source_inferred: bool,
    /// True when source and target were already the same identity
    pub no_op: bool,
    pub dry_run: bool,
    /// Rows moved per table, in registry order
    pub tables: Vec<TableCount>,
    pub total_rows: u64,
}

/// Rows moved for one table
#[derive(Debug, Serialize)]
pub struct TableCount {
    pub table: String,
    pub rows: u64,
}

impl ReassignReport {
    fn no_op(target: User, source_inferred: bool, tables: &[&str], dry_run: bool) -> Self {
        Self {
            source: target.clone(),
            target,
            source_inferred,
            no_op: true,
            dry_run,
            tables: tables
                .iter()
                .map(|table| TableCount {
                    table: (*table).to_string(),
                    rows: 0,
                })
                .collect(),
            total_rows: 0,
        }
    }
}
