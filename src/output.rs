//! Output formatting for listings.
//!
//! Renders a filtered view as paths, JSON, concatenated text, or per-file
//! details. Record content is written out unchanged.

use crate::details::FileDetails;
use crate::format::short_path;
use crate::{ExplorerError, FileRecord};

const LIST_PATH_WIDTH: usize = 40;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `category  path` line per record.
    Paths,
    Json,
    /// Each record's content under a `--- path ---` header.
    Text,
    Details,
}

/// Formats `records` into a string.
///
/// # Errors
///
/// Only JSON output can fail.
pub fn format_records(
    records: &[&FileRecord],
    format: OutputFormat,
    pretty: bool,
) -> Result<String, ExplorerError> {
    Ok(match format {
        OutputFormat::Paths => format_paths(records),
        OutputFormat::Json => format_json(records, pretty)?,
        OutputFormat::Text => format_text(records),
        OutputFormat::Details => format_details(records),
    })
}

/// A numbered listing with the selected index marked, for interactive use.
pub fn format_listing(records: &[&FileRecord], selected: Option<usize>) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        let marker = if Some(i) == selected { '>' } else { ' ' };
        out.push_str(&format!(
            "{} {:>3}  {:<14} {}\n",
            marker,
            i,
            record.category().label(),
            short_path(record.path(), LIST_PATH_WIDTH)
        ));
    }
    out
}

// ----------------------- Internal formatting -----------------------

fn format_paths(records: &[&FileRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "{:<14} {}\n",
            record.category().label(),
            record.path()
        ));
    }
    out
}

fn format_text(records: &[&FileRecord]) -> String {
    let mut out = String::with_capacity(1024);
    for record in records {
        out.push_str(&format!("--- {} ---\n", record.path()));
        out.push_str(record.content());
        if !record.content().ends_with('\n') { out.push('\n'); }
        out.push('\n');
    }
    out
}

fn format_details(records: &[&FileRecord]) -> String {
    records
        .iter()
        .map(|r| FileDetails::from_record(r).to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_json(records: &[&FileRecord], pretty: bool) -> Result<String, ExplorerError> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}
