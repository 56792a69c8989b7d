//! Integration module - Non-interactive output for scripting

pub mod print;

pub use print::{exit_code, print_feed, write_feed, OutputFormat, PrintOptions};
