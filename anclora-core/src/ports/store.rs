//! Store port - transactional database abstraction

use crate::domain::result::Result;
use crate::domain::User;

/// Transactional store abstraction
///
/// Adapters hand out one transaction at a time; work done through the
/// transaction becomes durable only on `commit`. A transaction dropped
/// without committing must roll back everything it did.
pub trait OwnershipStore {
    type Tx<'a>: StoreTx
    where
        Self: 'a;

    /// Begin a transaction scope
    fn begin(&mut self) -> Result<Self::Tx<'_>>;
}

/// Operations available inside a transaction scope
pub trait StoreTx {
    /// Look up an identity by email
    fn user_by_email(&mut self, email: &str) -> Result<Option<User>>;

    /// The lowest-id identity, used as the seed-data fallback owner
    fn first_user(&mut self) -> Result<Option<User>>;

    /// Subset of `tables` absent from the live schema
    fn missing_tables(&mut self, tables: &[&str]) -> Result<Vec<String>>;

    /// Rows of `table` currently owned by `owner`
    fn count_owned(&mut self, table: &str, owner: i32) -> Result<u64>;

    /// Move every row of `table` owned by `from` to `to`; returns rows changed
    fn reassign_table(&mut self, table: &str, from: i32, to: i32) -> Result<u64>;

    /// Commit the scope
    fn commit(self) -> Result<()>
    where
        Self: Sized;
}
