//! Integration tests for anclora-core services
//!
//! These tests drive the public crate API end-to-end against the
//! in-memory store adapter. The PostgreSQL adapter implements the same
//! port contract, so everything exercised here holds for live runs too.
//!
//! Run with: cargo test --test reassignment_tests

use anclora_core::adapters::memory::MemoryStore;
use anclora_core::{DoctorService, OwnershipService, ReassignRequest, OWNED_TABLES};

// ============================================================================
// Test Helpers
// ============================================================================

/// Store matching the documented seed deployment: identity 1 owns the
/// seed data, identity 2 is the operator's own account.
fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.add_user(1, "seed@anclora.local");
    store.add_user(2, "target@example.com");
    store.add_table("users");
    for table in OWNED_TABLES {
        store.add_table(table);
    }
    store.add_owned_rows("clients", 1, 3);
    store.add_owned_rows("invoices", 1, 2);
    store
}

fn reassign_to(email: &str) -> ReassignRequest {
    ReassignRequest {
        target_email: email.to_string(),
        source_email: None,
        tables: Vec::new(),
        dry_run: false,
    }
}

// ============================================================================
// End-to-end reassignment
// ============================================================================

#[test]
fn test_reassignment_moves_every_seed_row() {
    let mut service = OwnershipService::new(seeded_store());
    let report = service.reassign(&reassign_to("target@example.com")).unwrap();

    assert_eq!(report.total_rows, 5);
    assert_eq!(report.tables.len(), OWNED_TABLES.len());
    for entry in &report.tables {
        let expected = match entry.table.as_str() {
            "clients" => 3,
            "invoices" => 2,
            _ => 0,
        };
        assert_eq!(entry.rows, expected, "table {}", entry.table);
    }

    let store = service.store();
    for table in OWNED_TABLES {
        assert!(
            store.owners(table).iter().all(|owner| *owner == 2),
            "table {} still has rows not owned by the target",
            table
        );
    }
}

#[test]
fn test_doctor_passes_on_the_seed_deployment() {
    let mut doctor = DoctorService::new(seeded_store());
    let result = doctor.run_checks().unwrap();

    assert_eq!(result.summary.errors, 0);
    assert!(result.checks.iter().all(|check| check.status == "pass"));
}

#[test]
fn test_repeated_runs_are_idempotent() {
    let mut service = OwnershipService::new(seeded_store());

    let first = service.reassign(&reassign_to("target@example.com")).unwrap();
    let second = service.reassign(&reassign_to("target@example.com")).unwrap();

    assert_eq!(first.total_rows, 5);
    assert_eq!(second.total_rows, 0);
    assert!(!second.no_op);
}

#[test]
fn test_dry_run_predicts_the_real_run() {
    let mut service = OwnershipService::new(seeded_store());

    let mut preview_request = reassign_to("target@example.com");
    preview_request.dry_run = true;
    let preview = service.reassign(&preview_request).unwrap();

    let applied = service.reassign(&reassign_to("target@example.com")).unwrap();

    assert_eq!(preview.total_rows, applied.total_rows);
    for (previewed, moved) in preview.tables.iter().zip(applied.tables.iter()) {
        assert_eq!(previewed.table, moved.table);
        assert_eq!(previewed.rows, moved.rows);
    }
}
