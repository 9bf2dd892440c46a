//! PostgreSQL store implementation

use std::time::Duration;

use postgres::{Client, NoTls};

use crate::config::DbConfig;
use crate::domain::result::{Error, Result};
use crate::domain::User;
use crate::ports::{OwnershipStore, StoreTx};

/// How long to wait for the initial connection before reporting the
/// store unreachable
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// PostgreSQL store
///
/// Owns a single connection for the duration of one invocation; there is
/// no pooling and no concurrent access.
pub struct PgStore {
    client: Client,
}

impl PgStore {
    /// Connect using the given configuration
    ///
    /// Fails with a connection error when the store is unreachable,
    /// before any transaction is opened.
    pub fn connect(config: &DbConfig) -> Result<Self> {
        config.validate()?;

        let mut pg = postgres::Config::new();
        pg.host(&config.host)
            .port(config.port)
            .dbname(&config.database)
            .user(&config.user)
            .connect_timeout(CONNECT_TIMEOUT);
        if !config.password.is_empty() {
            pg.password(&config.password);
        }

        let client = pg
            .connect(NoTls)
            .map_err(|e| Error::connection(e.to_string()))?;
        Ok(Self { client })
    }
}

impl OwnershipStore for PgStore {
    type Tx<'a>
        = PgTx<'a>
    where
        Self: 'a;

    fn begin(&mut self) -> Result<PgTx<'_>> {
        let tx = self.client.transaction().map_err(map_pg_err)?;
        Ok(PgTx { tx })
    }
}

/// Open transaction on a [`PgStore`]
///
/// `postgres::Transaction` rolls back on drop, so every exit path that
/// does not reach `commit` leaves the store untouched.
pub struct PgTx<'a> {
    tx: postgres::Transaction<'a>,
}

/// A closed connection means the store went away; everything else failed
/// inside the transaction.
fn map_pg_err(e: postgres::Error) -> Error {
    if e.is_closed() {
        Error::connection(e.to_string())
    } else {
        Error::transaction(e.to_string())
    }
}

impl StoreTx for PgTx<'_> {
    fn user_by_email(&mut self, email: &str) -> Result<Option<User>> {
        let row = self
            .tx
            .query_opt("SELECT id, email FROM users WHERE email = $1", &[&email])
            .map_err(map_pg_err)?;
        Ok(row.map(|r| User::new(r.get(0), r.get::<_, String>(1))))
    }

    fn first_user(&mut self) -> Result<Option<User>> {
        // Deterministic stand-in for the seed importer's "first user":
        // the lowest id, not whatever an unordered scan returns.
        let row = self
            .tx
            .query_opt("SELECT id, email FROM users ORDER BY id LIMIT 1", &[])
            .map_err(map_pg_err)?;
        Ok(row.map(|r| User::new(r.get(0), r.get::<_, String>(1))))
    }

    fn missing_tables(&mut self, tables: &[&str]) -> Result<Vec<String>> {
        let mut missing = Vec::new();
        for table in tables {
            let row = self
                .tx
                .query_one(
                    "SELECT EXISTS (
                         SELECT 1 FROM information_schema.tables
                         WHERE table_schema = 'public' AND table_name = $1
                     )",
                    &[table],
                )
                .map_err(map_pg_err)?;
            let exists: bool = row.get(0);
            if !exists {
                missing.push((*table).to_string());
            }
        }
        Ok(missing)
    }

    fn count_owned(&mut self, table: &str, owner: i32) -> Result<u64> {
        // Table names come from the validated registry; only the owner id
        // is a bind parameter.
        let sql = format!("SELECT COUNT(*) FROM {} WHERE user_id = $1", table);
        let row = self.tx.query_one(&sql, &[&owner]).map_err(map_pg_err)?;
        let count: i64 = row.get(0);
        Ok(count as u64)
    }

    fn reassign_table(&mut self, table: &str, from: i32, to: i32) -> Result<u64> {
        let sql = format!("UPDATE {} SET user_id = $1 WHERE user_id = $2", table);
        self.tx.execute(&sql, &[&to, &from]).map_err(map_pg_err)
    }

    fn commit(self) -> Result<()> {
        self.tx.commit().map_err(map_pg_err)
    }
}
