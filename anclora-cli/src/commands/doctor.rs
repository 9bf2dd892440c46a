//! Doctor command - run database pre-flight checks

use anclora_core::{DbConfig, DoctorService};
use anyhow::Result;
use colored::Colorize;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use super::connect;

pub fn run(config: &DbConfig, json: bool) -> Result<()> {
    let store = connect(config)?;
    let mut service = DoctorService::new(store);
    let result = service.run_checks()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        if result.summary.errors > 0 {
            std::process::exit(1);
        }
        return Ok(());
    }

    println!("{}", "Database Pre-flight Checks".bold());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Check", "Status", "Message"]);

    for check in &result.checks {
        let status_cell = match check.status.as_str() {
            "pass" => Cell::new("PASS").fg(Color::Green),
            "error" => Cell::new("ERROR").fg(Color::Red),
            _ => Cell::new(&check.status),
        };

        table.add_row(vec![
            Cell::new(&check.name),
            status_cell,
            Cell::new(&check.message),
        ]);
    }

    println!("{}", table);
    println!();

    println!(
        "Summary: {} passed, {} errors",
        result.summary.passed.to_string().green(),
        result.summary.errors.to_string().red(),
    );

    if result.summary.errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}
