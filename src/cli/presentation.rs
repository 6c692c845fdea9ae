//! CLI presentation: pure formatters for comparison output.
//! No I/O; route handlers pass results in and print what comes back.

mod comparison;
mod details;

pub use comparison::{format_comparison_json, format_comparison_text, format_summary_table};
pub use details::{format_details_json, format_details_text};
