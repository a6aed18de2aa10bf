//! Console output utilities.

use std::path::Path;

use console::style;

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the per-item confirmation line.
pub fn print_saved(path: &Path) {
    println!("{} {}", style("Saved:").green().bold(), path.display());
}
