//! Output-directory tagging for cleaned exports.
//!
//! Downstream file movers route each asset into one of a closed set of
//! directories based on its title type and content tag. Exact archive
//! rules are applied first; a broader set of substring rules then catches
//! rows the primary classification missed.

use std::collections::BTreeMap;
use std::io::{Read, Write};

use mediacat_core::{NO_VALUE, TitleType};

use crate::error::TableError;

/// Column appended to the export by [`append_output_dir`].
pub const OUTPUT_DIR_COLUMN: &str = "CF_OUTPUT_DIR";

/// Content tags that identify an NLE project bundle.
pub const PROJECT_CONTENT_TYPES: &[&str] = &["AVP", "FCP", "PPRO", "PTS"];

/// The closed set of routing targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputDir {
    Video,
    Document,
    Package,
    Project,
    Audio,
    Unknown,
}

impl OutputDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Document => "document",
            Self::Package => "package",
            Self::Project => "project",
            Self::Audio => "audio",
            Self::Unknown => "unknown",
        }
    }
}

/// Assign the output directory for one row.
pub fn output_directory(title_type: Option<TitleType>, content_type: Option<&str>) -> OutputDir {
    let content = content_type.unwrap_or("").to_ascii_uppercase();

    match title_type {
        Some(TitleType::Video) => return OutputDir::Video,
        Some(TitleType::Document) => return OutputDir::Document,
        Some(TitleType::Graphic) => return OutputDir::Package,
        Some(TitleType::Archive) => {
            // Exact matches first, then partial.
            if PROJECT_CONTENT_TYPES.contains(&content.as_str()) {
                return OutputDir::Project;
            }
            if content == "GRFX" {
                return OutputDir::Package;
            }
            if content.contains("WAV") {
                return OutputDir::Audio;
            }
            if PROJECT_CONTENT_TYPES.iter().any(|p| content.contains(p)) {
                return OutputDir::Project;
            }
            if content.contains("GRFX") {
                return OutputDir::Package;
            }
        }
        None => {}
    }

    // Flexible rules for any title type, catching rows the primary
    // classification missed.
    if PROJECT_CONTENT_TYPES.iter().any(|p| content.contains(p)) {
        OutputDir::Project
    } else if content.contains("WAV") || content.contains("AUDIO") {
        OutputDir::Audio
    } else if content.contains("VIDEO") || content.contains("MOV") || content.contains("MP4") {
        OutputDir::Video
    } else if content.contains("DOC") || content.contains("PDF") || content.contains("TXT") {
        OutputDir::Document
    } else if content.contains("GRFX")
        || content.contains("PNG")
        || content.contains("JPG")
        || content.contains("TIFF")
    {
        OutputDir::Package
    } else {
        OutputDir::Unknown
    }
}

/// Result of tagging an export: row count and per-target tallies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSummary {
    pub rows: usize,
    pub counts: BTreeMap<&'static str, usize>,
}

/// Append the output-directory column to a cleaned export.
///
/// Requires the TITLETYPE and CONTENT_TYPE columns produced by the
/// enrichment run; every other column passes through untouched.
pub fn append_output_dir<R: Read, W: Write>(
    reader: R,
    writer: W,
) -> Result<TagSummary, TableError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let title_at = find_column(&headers, "TITLETYPE")?;
    let content_at = find_column(&headers, "CONTENT_TYPE")?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut out_headers = headers.clone();
    out_headers.push_field(OUTPUT_DIR_COLUMN);
    csv_writer.write_record(&out_headers)?;

    let mut summary = TagSummary::default();
    for row in csv_reader.records() {
        let row = row?;
        let title = row.get(title_at).and_then(TitleType::parse);
        let content = row
            .get(content_at)
            .filter(|c| !c.is_empty() && *c != NO_VALUE && !c.eq_ignore_ascii_case("nan"));

        let dir = output_directory(title, content);
        let mut out_row = row.clone();
        out_row.push_field(dir.as_str());
        csv_writer.write_record(&out_row)?;

        summary.rows += 1;
        *summary.counts.entry(dir.as_str()).or_insert(0) += 1;
    }
    csv_writer.flush()?;

    Ok(summary)
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize, TableError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| TableError::invalid_input(format!("{name} column not found")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_title_rules() {
        assert_eq!(
            output_directory(Some(TitleType::Video), Some("VM")),
            OutputDir::Video
        );
        assert_eq!(
            output_directory(Some(TitleType::Document), None),
            OutputDir::Document
        );
        assert_eq!(
            output_directory(Some(TitleType::Graphic), None),
            OutputDir::Package
        );
    }

    #[test]
    fn archive_exact_rules() {
        for tag in ["AVP", "FCP", "PPRO", "PTS"] {
            assert_eq!(
                output_directory(Some(TitleType::Archive), Some(tag)),
                OutputDir::Project
            );
        }
        assert_eq!(
            output_directory(Some(TitleType::Archive), Some("GRFX")),
            OutputDir::Package
        );
        assert_eq!(
            output_directory(Some(TitleType::Archive), Some("WAV STEMS")),
            OutputDir::Audio
        );
    }

    #[test]
    fn archive_partial_rules() {
        assert_eq!(
            output_directory(Some(TitleType::Archive), Some("AVP, WAV")),
            OutputDir::Audio
        );
        assert_eq!(
            output_directory(Some(TitleType::Archive), Some("PPRO PROJECT")),
            OutputDir::Project
        );
    }

    #[test]
    fn flexible_rules_apply_to_untyped_rows() {
        assert_eq!(output_directory(None, Some("FCP")), OutputDir::Project);
        assert_eq!(output_directory(None, Some("AUDIO")), OutputDir::Audio);
        assert_eq!(output_directory(None, Some("MP4")), OutputDir::Video);
        assert_eq!(output_directory(None, Some("PDF")), OutputDir::Document);
        assert_eq!(output_directory(None, Some("PNG")), OutputDir::Package);
    }

    #[test]
    fn nothing_matches_means_unknown() {
        assert_eq!(output_directory(None, None), OutputDir::Unknown);
        assert_eq!(
            output_directory(Some(TitleType::Archive), Some("XYZ")),
            OutputDir::Unknown
        );
    }

    #[test]
    fn tagging_appends_column_and_counts() {
        let input = "\
NAME,TITLETYPE,CONTENT_TYPE
A,video,VM
B,archive,AVP
C,NULL,NULL
";
        let mut out = Vec::new();
        let summary = append_output_dir(input.as_bytes(), &mut out).unwrap();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.counts.get("video"), Some(&1));
        assert_eq!(summary.counts.get("project"), Some(&1));
        assert_eq!(summary.counts.get("unknown"), Some(&1));

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("NAME,TITLETYPE,CONTENT_TYPE,CF_OUTPUT_DIR"));
        assert_eq!(lines.next(), Some("A,video,VM,video"));
    }

    #[test]
    fn missing_columns_are_rejected() {
        let input = "NAME\nA\n";
        assert!(append_output_dir(input.as_bytes(), &mut Vec::new()).is_err());
    }
}
