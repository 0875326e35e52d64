//! Reporting helpers over cleaned exports.

use std::collections::BTreeSet;
use std::io::Read;

use crate::error::TableError;

/// Distinct, sorted tokens across a set of cell values.
///
/// Cells containing a comma split on commas, everything else splits on
/// whitespace; blank and NaN cells are skipped.
pub fn unique_tokens<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut tokens = BTreeSet::new();

    for value in values {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("nan") {
            continue;
        }
        let parts: Vec<&str> = if value.contains(',') {
            value.split(',').collect()
        } else {
            value.split_whitespace().collect()
        };
        for part in parts {
            let part = part.trim();
            if !part.is_empty() {
                tokens.insert(part.to_string());
            }
        }
    }

    tokens.into_iter().collect()
}

/// Collect the distinct tokens of one column of an export, sorted.
pub fn unique_column_values<R: Read>(reader: R, column: &str) -> Result<Vec<String>, TableError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let at = csv_reader
        .headers()?
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| TableError::invalid_input(format!("{column} column not found")))?;

    let mut cells = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        if let Some(cell) = row.get(at) {
            cells.push(cell.to_string());
        }
    }

    Ok(unique_tokens(cells.iter().map(String::as_str)))
}
