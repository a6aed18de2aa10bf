//! Output module for console output.

pub mod console;

pub use console::{print_error, print_saved};
