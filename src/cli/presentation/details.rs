//! Details presentation: one entry's metadata on both sides.

use crate::error::CompareError;
use crate::tree::node::Node;
use chrono::{DateTime, Utc};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

const NOT_FOUND: &str = "not found in this directory";

pub fn format_details_json(
    path: &str,
    left: Option<&Node>,
    right: Option<&Node>,
) -> Result<String, CompareError> {
    let out = serde_json::json!({
        "path": path,
        "dir1": left,
        "dir2": right,
    });
    Ok(serde_json::to_string_pretty(&out)?)
}

pub fn format_details_text(
    path: &str,
    (dir1, left): (&str, Option<&Node>),
    (dir2, right): (&str, Option<&Node>),
) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["", dir1, dir2]);

    let left_rows = describe(left);
    let right_rows = describe(right);
    for ((field, l), (_, r)) in left_rows.into_iter().zip(right_rows) {
        table.add_row(vec![field.to_string(), l, r]);
    }

    format!("Details for {}\n{}", display_path(path), table)
}

fn display_path(path: &str) -> &str {
    if path.trim_matches('/').is_empty() {
        "(root)"
    } else {
        path
    }
}

fn describe(node: Option<&Node>) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Type", String::new()),
        ("Status", String::new()),
        ("Size", String::new()),
        ("Size on disk", String::new()),
        ("Created", String::new()),
        ("Modified", String::new()),
        ("Accessed", String::new()),
        ("Content hash", String::new()),
    ];

    let Some(node) = node else {
        rows[0].1 = NOT_FOUND.to_string();
        return rows;
    };

    rows[1].1 = node
        .status()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());

    match node {
        Node::Folder(folder) => {
            rows[0].1 = format!("folder ({} entries)", folder.children.len());
        }
        Node::File(file) => {
            rows[0].1 = "file".to_string();
            if let Some(info) = &file.info {
                rows[2].1 = info.size.to_string();
                rows[3].1 = info.size_on_disk.to_string();
                rows[4].1 = format_timestamp(info.created);
                rows[5].1 = format_timestamp(info.modified);
                rows[6].1 = format_timestamp(info.accessed);
                rows[7].1 = file
                    .content_hash()
                    .map(hex::encode)
                    .unwrap_or_else(|| "-".to_string());
            }
        }
    }
    rows
}

fn format_timestamp(secs: f64) -> String {
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9) as u32;
    DateTime::<Utc>::from_timestamp(whole as i64, nanos.min(999_999_999))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("{}", secs))
}
