//! Comparison presentation: annotated tree listings and the summary table.

use crate::compare::Comparison;
use crate::diff::DiffStats;
use crate::error::CompareError;
use crate::tree::node::{Node, Status};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

pub fn format_comparison_json(comparison: &Comparison) -> Result<String, CompareError> {
    comparison.to_json()
}

/// Both annotated trees as indented listings, then the summary table.
pub fn format_comparison_text(comparison: &Comparison, color: bool) -> String {
    let mut out = String::new();
    render_side(&mut out, &comparison.dir1, comparison.tree1.as_ref(), color);
    out.push('\n');
    render_side(&mut out, &comparison.dir2, comparison.tree2.as_ref(), color);
    out.push('\n');
    out.push_str(&format_summary_table(&comparison.stats()));
    out
}

pub fn format_summary_table(stats: &DiffStats) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Same", "Different", "Missing", "Files", "Folders"]);
    table.add_row(vec![
        stats.same.to_string(),
        stats.different.to_string(),
        stats.missing.to_string(),
        stats.files().to_string(),
        stats.folders.to_string(),
    ]);
    table.to_string()
}

fn render_side(out: &mut String, root: &str, tree: Option<&Node>, color: bool) {
    if color {
        out.push_str(&format!("{}\n", root.bold().underline()));
    } else {
        out.push_str(root);
        out.push('\n');
    }
    match tree {
        Some(node) => render_node(out, node, 0, color),
        None => out.push_str("  (empty or inaccessible)\n"),
    }
}

fn render_node(out: &mut String, node: &Node, depth: usize, color: bool) {
    let indent = "  ".repeat(depth + 1);
    let label = match node {
        Node::Folder(_) => format!("{}/", node.name()),
        Node::File(_) => node.name().to_string(),
    };
    let tag = status_tag(node.status(), node.is_placeholder());
    let line = format!("{} [{}]", label, tag);

    out.push_str(&indent);
    if color {
        let colored = match node.status() {
            _ if node.is_placeholder() => line.dimmed().to_string(),
            Some(Status::Same) => line.green().to_string(),
            Some(Status::Different) => line.yellow().to_string(),
            Some(Status::Missing) => line.red().to_string(),
            None => line,
        };
        out.push_str(&colored);
    } else {
        out.push_str(&line);
    }
    out.push('\n');

    for child in node.children() {
        render_node(out, child, depth + 1, color);
    }
}

fn status_tag(status: Option<Status>, placeholder: bool) -> String {
    match (status, placeholder) {
        (Some(s), true) => format!("{}, absent", s),
        (Some(s), false) => s.to_string(),
        (None, _) => "unchecked".to_string(),
    }
}
