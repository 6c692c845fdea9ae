//! CLI domain: parse, route, output, and presentation only.
//! No comparison logic; the route table dispatches to the library entry points.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_comparison_json, format_comparison_text, format_details_json, format_details_text,
    format_summary_table,
};
pub use route::RunContext;
