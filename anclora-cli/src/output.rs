//! Terminal output helpers

use colored::Colorize;

/// Print a success line with a leading check mark
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a warning line
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an informational line
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}
