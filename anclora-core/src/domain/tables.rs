//! Owned-table registry
//!
//! Every domain table carrying a `user_id` owner reference, in the order
//! the reassignment report presents them. The operation refuses table
//! names outside this list, so SQL never interpolates an unvalidated
//! identifier.

use crate::domain::result::{Error, Result};

/// Domain tables whose rows carry a single-owner `user_id` reference
pub const OWNED_TABLES: [&str; 7] = [
    "clients",
    "projects",
    "invoices",
    "bank_accounts",
    "expenses",
    "budgets",
    "subscriptions",
];

/// Resolve a requested table list against the registry
///
/// An empty request means "all owned tables". The result always follows
/// registry order regardless of request order, and duplicates collapse.
pub fn resolve_tables(requested: &[String]) -> Result<Vec<&'static str>> {
    if requested.is_empty() {
        return Ok(OWNED_TABLES.to_vec());
    }

    let unknown: Vec<String> = requested
        .iter()
        .filter(|name| !OWNED_TABLES.contains(&name.as_str()))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(Error::validation(format!(
            "unknown table(s): {} (known tables: {})",
            unknown.join(", "),
            OWNED_TABLES.join(", ")
        )));
    }

    Ok(OWNED_TABLES
        .iter()
        .copied()
        .filter(|table| requested.iter().any(|name| name == table))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_means_all_tables() {
        let tables = resolve_tables(&[]).unwrap();
        assert_eq!(tables, OWNED_TABLES.to_vec());
    }

    #[test]
    fn test_subset_follows_registry_order() {
        let requested = vec!["invoices".to_string(), "clients".to_string()];
        let tables = resolve_tables(&requested).unwrap();
        assert_eq!(tables, vec!["clients", "invoices"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let requested = vec!["budgets".to_string(), "budgets".to_string()];
        let tables = resolve_tables(&requested).unwrap();
        assert_eq!(tables, vec!["budgets"]);
    }

    #[test]
    fn test_unknown_table_is_rejected() {
        let requested = vec!["clients".to_string(), "payments".to_string()];
        let err = resolve_tables(&requested).unwrap_err();
        assert!(err.to_string().contains("payments"));
    }
}
