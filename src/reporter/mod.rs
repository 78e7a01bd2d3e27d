//! Report rendering: colored console table and machine-readable JSON.

mod console;
mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
