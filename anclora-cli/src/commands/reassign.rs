//! Reassign command - transfer owned rows between identities

use anclora_core::{DbConfig, OwnershipService, ReassignReport, ReassignRequest};
use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use super::connect;
use crate::output;

pub fn run(
    config: &DbConfig,
    email: &str,
    from_email: Option<String>,
    tables: Vec<String>,
    dry_run: bool,
    yes: bool,
    json: bool,
) -> Result<()> {
    // Confirm before mutating unless the operator opted out
    if !dry_run && !yes {
        println!(
            "\n{}",
            format!("This will reassign every owned row to '{}'.", email).yellow()
        );
        match &from_email {
            Some(source) => println!(
                "{}\n",
                format!("Rows currently owned by '{}' will move.", source).dimmed()
            ),
            None => println!(
                "{}\n",
                "The current owner will be inferred from the seed data.".dimmed()
            ),
        }

        if !Confirm::new()
            .with_prompt("Are you sure?")
            .default(false)
            .interact()?
        {
            println!("{}\n", "Cancelled".dimmed());
            return Ok(());
        }
    }

    let store = connect(config)?;
    let mut service = OwnershipService::new(store);

    let request = ReassignRequest {
        target_email: email.to_string(),
        source_email: from_email,
        tables,
        dry_run,
    };
    let report = service.reassign(&request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &ReassignReport) {
    if report.dry_run {
        println!("{}", "Ownership Reassignment (dry run)".bold());
    } else {
        println!("{}", "Ownership Reassignment".bold());
    }
    println!();

    println!("Source: {} (id {})", report.source.email, report.source.id);
    println!("Target: {} (id {})", report.target.email, report.target.id);
    if report.source_inferred && !report.no_op {
        output::warning(
            "Source was inferred from the lowest user id; pass --from-email to name it explicitly",
        );
    }
    println!();

    if report.no_op {
        output::success(&format!(
            "{} already owns the seed data; nothing to move",
            report.target.email
        ));
        return;
    }

    for entry in &report.tables {
        let verb = if report.dry_run { "would move" } else { "moved" };
        println!("  - {}: {} row(s) {}", entry.table, entry.rows, verb);
    }
    println!();

    if report.dry_run {
        output::info(&format!(
            "{} row(s) across {} table(s) would move; nothing was changed",
            report.total_rows,
            report.tables.len()
        ));
    } else {
        output::success(&format!(
            "Moved {} row(s) across {} table(s)",
            report.total_rows,
            report.tables.len()
        ));
    }
}
