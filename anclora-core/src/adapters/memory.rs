//! In-memory store for tests and demos
//!
//! Mirrors the PostgreSQL adapter's transactional behavior: every
//! mutation is staged on the transaction and reaches the store only on
//! commit, so rollback-on-drop comes for free.

use std::collections::BTreeMap;

use crate::domain::result::{Error, Result};
use crate::domain::User;
use crate::ports::{OwnershipStore, StoreTx};

/// In-memory store
///
/// Rows are modeled as one owner id per row; that is the only attribute
/// the reassignment operation can observe or mutate.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Vec<User>,
    tables: BTreeMap<String, Vec<i32>>,
    fail_on_table: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an identity
    pub fn add_user(&mut self, id: i32, email: &str) {
        self.users.push(User::new(id, email));
    }

    /// Register a table with no rows
    pub fn add_table(&mut self, table: &str) {
        self.tables.entry(table.to_string()).or_default();
    }

    /// Append `count` rows owned by `owner`
    pub fn add_owned_rows(&mut self, table: &str, owner: i32, count: usize) {
        self.tables
            .entry(table.to_string())
            .or_default()
            .extend(std::iter::repeat(owner).take(count));
    }

    /// Make `reassign_table` fail when it reaches `table`, simulating a
    /// mid-transaction fault
    pub fn fail_on_table(&mut self, table: &str) {
        self.fail_on_table = Some(table.to_string());
    }

    /// Owner ids of every row in `table`
    pub fn owners(&self, table: &str) -> &[i32] {
        self.tables.get(table).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl OwnershipStore for MemoryStore {
    type Tx<'a>
        = MemoryTx<'a>
    where
        Self: 'a;

    fn begin(&mut self) -> Result<MemoryTx<'_>> {
        let staged = self.tables.clone();
        Ok(MemoryTx {
            store: self,
            staged,
        })
    }
}

/// Staged view of a [`MemoryStore`]; applied on commit, discarded on drop
pub struct MemoryTx<'a> {
    store: &'a mut MemoryStore,
    staged: BTreeMap<String, Vec<i32>>,
}

impl StoreTx for MemoryTx<'_> {
    fn user_by_email(&mut self, email: &str) -> Result<Option<User>> {
        Ok(self.store.users.iter().find(|u| u.email == email).cloned())
    }

    fn first_user(&mut self) -> Result<Option<User>> {
        Ok(self.store.users.iter().min_by_key(|u| u.id).cloned())
    }

    fn missing_tables(&mut self, tables: &[&str]) -> Result<Vec<String>> {
        let mut missing = Vec::new();
        for table in tables {
            if !self.staged.contains_key(*table) {
                missing.push((*table).to_string());
            }
        }
        Ok(missing)
    }

    fn count_owned(&mut self, table: &str, owner: i32) -> Result<u64> {
        Ok(self
            .staged
            .get(table)
            .map(|rows| rows.iter().filter(|o| **o == owner).count() as u64)
            .unwrap_or(0))
    }

    fn reassign_table(&mut self, table: &str, from: i32, to: i32) -> Result<u64> {
        if self.store.fail_on_table.as_deref() == Some(table) {
            return Err(Error::transaction(format!(
                "simulated failure on table {}",
                table
            )));
        }

        let rows = self
            .staged
            .get_mut(table)
            .ok_or_else(|| Error::transaction(format!("no such table: {}", table)))?;
        let mut moved = 0u64;
        for owner in rows.iter_mut() {
            if *owner == from {
                *owner = to;
                moved += 1;
            }
        }
        Ok(moved)
    }

    fn commit(self) -> Result<()> {
        self.store.tables = self.staged;
        Ok(())
    }
}
