//! Display-name cleanup for exports damaged by an encoding mismatch.
//!
//! A batch of catalog rows passed through a UTF-8-as-MacRoman round trip,
//! leaving zero-width spaces mangled into the visible `‚Äã` sequence (and
//! assorted other non-ASCII debris) inside display names.

use std::io::{Read, Write};

use crate::error::TableError;

/// Name-bearing columns cleaned when present, in header order.
const NAME_COLUMNS: &[&str] = &["NAME", "FILENAME", "OBJECTNM"];

/// Strip the mojibake artifact and every other non-ASCII remnant from a
/// display name. ASCII input passes through unchanged.
pub fn clean_display_name(name: &str) -> String {
    name.chars().filter(char::is_ascii).collect()
}

/// Per-column change counts from a cleanup run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameCleanSummary {
    pub rows: usize,
    /// (column, values changed) for each name column found.
    pub changed: Vec<(String, usize)>,
}

/// Clean every name-bearing column of an export, writing the full table
/// back out with the cleaned values in place.
pub fn clean_name_columns<R: Read, W: Write>(
    reader: R,
    writer: W,
) -> Result<NameCleanSummary, TableError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let targets: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| NAME_COLUMNS.contains(h))
        .map(|(i, h)| (i, h.to_string()))
        .collect();
    if targets.is_empty() {
        return Err(TableError::invalid_input(
            "no filename columns found in the export",
        ));
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&headers)?;

    let mut summary = NameCleanSummary::default();
    let mut changed = vec![0usize; targets.len()];

    for row in csv_reader.records() {
        let row = row?;
        let mut out_row = csv::StringRecord::new();
        for (i, cell) in row.iter().enumerate() {
            if let Some(slot) = targets.iter().position(|(at, _)| *at == i) {
                let cleaned = clean_display_name(cell);
                if cleaned != cell {
                    changed[slot] += 1;
                }
                out_row.push_field(&cleaned);
            } else {
                out_row.push_field(cell);
            }
        }
        csv_writer.write_record(&out_row)?;
        summary.rows += 1;
    }
    csv_writer.flush()?;

    summary.changed = targets
        .into_iter()
        .zip(changed)
        .map(|((_, name), count)| (name, count))
        .collect();
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_names_pass_through() {
        assert_eq!(clean_display_name("012345_SHOW_VM"), "012345_SHOW_VM");
    }

    #[test]
    fn mojibake_sequence_is_removed() {
        assert_eq!(clean_display_name("SHOW\u{201a}\u{c4}\u{e3}_VM"), "SHOW_VM");
        assert_eq!(
            clean_display_name("A\u{201a}\u{c4}\u{e3}-\u{201a}\u{c4}\u{e3}B"),
            "A-B"
        );
    }

    #[test]
    fn other_non_ascii_is_stripped() {
        assert_eq!(clean_display_name("CAFÉ_VM"), "CAF_VM");
    }

    #[test]
    fn cleanup_rewrites_only_name_columns() {
        let input = "NAME,GUID\nSHOW\u{201a}\u{c4}\u{e3}_VM,gü-1\n";
        let mut out = Vec::new();
        let summary = clean_name_columns(input.as_bytes(), &mut out).unwrap();
        assert_eq!(summary.rows, 1);
        assert_eq!(summary.changed, vec![("NAME".to_string(), 1)]);

        let text = String::from_utf8(out).unwrap();
        // GUID keeps its non-ASCII character; NAME is cleaned.
        assert!(text.contains("SHOW_VM"));
        assert!(text.contains("gü-1"));
    }

    #[test]
    fn export_without_name_columns_is_rejected() {
        let input = "GUID\n1\n";
        assert!(clean_name_columns(input.as_bytes(), &mut Vec::new()).is_err());
    }
}
