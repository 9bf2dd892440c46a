//! CLI command implementations

pub mod doctor;
pub mod reassign;

use anclora_core::adapters::postgres::PgStore;
use anclora_core::DbConfig;
use anyhow::{Context, Result};

/// Open a connection to the configured store
pub fn connect(config: &DbConfig) -> Result<PgStore> {
    PgStore::connect(config).with_context(|| {
        format!(
            "Failed to connect to {}:{}/{}",
            config.host, config.port, config.database
        )
    })
}
