//! The enrichment pipeline: one record in, one enriched record out, with
//! the whole-batch orchestration on top.
//!
//! Each stage is a pure function over the record produced by the prior
//! stage; diagnostics surface through an injected progress callback so
//! callers (and tests) observe them without global state.

use std::path::Path;

use mediacat_core::{Enrichment, RawRecord};
use mediacat_meta::{MediaInfo, resolve_or_estimate};

use crate::classify::classify_name;
use crate::error::TableError;
use crate::normalize::normalize_record;
use crate::table;
use crate::traffic::extract_traffic_code;

/// Options controlling a batch enrichment run.
#[derive(Debug, Clone, Default)]
pub struct EnrichOptions {
    /// Maximum number of rows to enrich (after the join-marker filter).
    pub limit: Option<usize>,
}

/// Which path produced a record's technical attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaPath {
    Resolved,
    Estimated,
    Unavailable,
}

/// Progress and diagnostic events emitted while enriching.
#[derive(Debug, Clone)]
pub enum EnrichEvent {
    /// Starting a row; `name` is already normalized.
    RowStarted { index: usize, name: String },
    /// The name carried `&` characters that were substituted.
    NameSubstituted { index: usize, name: String },
    /// The sidecar blob carried `&` characters that were substituted.
    SidecarSubstituted { index: usize, name: String },
    /// No traffic code could be derived.
    TrafficCodeMissing { index: usize, name: String },
    /// Neither marker class matched; the record stays unclassified.
    Unclassified { index: usize, name: String },
    /// Which path produced the technical attributes.
    Media { index: usize, path: MediaPath },
    /// All rows processed.
    Done,
}

/// Summary of a batch enrichment run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichSummary {
    pub rows: usize,
    pub resolved: usize,
    pub estimated: usize,
    pub unavailable: usize,
    pub unclassified: usize,
}

/// Enrich a single record.
///
/// Returns the normalized record (the output table carries the normalized
/// NAME and METAXML) together with its derived columns and the media path
/// taken. Total: every failure mode inside the stages degrades to absent
/// fields rather than an error.
pub fn enrich_record(
    index: usize,
    record: &RawRecord,
    progress: &dyn Fn(EnrichEvent),
) -> (RawRecord, Enrichment, MediaPath) {
    let (normalized, outcome) = normalize_record(record);
    progress(EnrichEvent::RowStarted {
        index,
        name: normalized.name.clone(),
    });
    if outcome.name_substituted {
        log::info!("name for {} was modified to remove '&' characters", normalized.name);
        progress(EnrichEvent::NameSubstituted {
            index,
            name: normalized.name.clone(),
        });
    }
    if outcome.sidecar_substituted {
        log::info!(
            "metaxml for {} was modified to remove '&' characters",
            normalized.name
        );
        progress(EnrichEvent::SidecarSubstituted {
            index,
            name: normalized.name.clone(),
        });
    }

    let traffic_code = extract_traffic_code(&normalized.name);
    if traffic_code.is_none() {
        log::error!(
            "incompatible file ID - {}. traffic code set to NULL",
            normalized.name
        );
        progress(EnrichEvent::TrafficCodeMissing {
            index,
            name: normalized.name.clone(),
        });
    }

    let classification = classify_name(&normalized.name);
    if classification.title_type.is_none() {
        log::info!("TITLETYPE for {} is NULL", normalized.name);
        progress(EnrichEvent::Unclassified {
            index,
            name: normalized.name.clone(),
        });
    }

    let media = resolve_or_estimate(&normalized, classification.title_type);
    let path = match media {
        MediaInfo::Resolved(_) => MediaPath::Resolved,
        MediaInfo::Estimated(_) => MediaPath::Estimated,
        MediaInfo::Unavailable => MediaPath::Unavailable,
    };
    progress(EnrichEvent::Media { index, path });

    let mut enrichment = Enrichment {
        title_type: classification.title_type,
        content_type: classification.content_type,
        traffic_code,
        ..Enrichment::default()
    };
    if let Some(tech) = media.tech() {
        enrichment = enrichment.with_tech(tech);
    }

    (normalized, enrichment, path)
}

/// Enrich a batch of records, accumulating the output rows and a summary.
pub fn enrich_records(
    records: &[RawRecord],
    options: &EnrichOptions,
    progress: &dyn Fn(EnrichEvent),
) -> (Vec<(RawRecord, Enrichment)>, EnrichSummary) {
    let take = options.limit.unwrap_or(records.len());
    let mut rows = Vec::with_capacity(records.len().min(take));
    let mut summary = EnrichSummary::default();

    for (index, record) in records.iter().take(take).enumerate() {
        let (normalized, enrichment, path) = enrich_record(index, record, progress);
        summary.rows += 1;
        match path {
            MediaPath::Resolved => summary.resolved += 1,
            MediaPath::Estimated => summary.estimated += 1,
            MediaPath::Unavailable => summary.unavailable += 1,
        }
        if enrichment.title_type.is_none() {
            summary.unclassified += 1;
        }
        rows.push((normalized, enrichment));
    }

    progress(EnrichEvent::Done);
    (rows, summary)
}

/// Run the whole enrichment over an export file.
///
/// Reads the merged input table (dropping rows not marked `both`), writes
/// the pre-enrichment snapshot with placeholder columns, enriches every
/// row, then rewrites the output with final values. A row that cannot be
/// read aborts the remaining batch with its index; there is no partial
/// recovery beyond the snapshot already written.
pub fn enrich_table(
    input: &Path,
    output: &Path,
    options: &EnrichOptions,
    progress: &dyn Fn(EnrichEvent),
) -> Result<EnrichSummary, TableError> {
    log::info!("START catalog export clean: {}", input.display());

    let records = table::read_records_from_path(input)?;
    table::write_placeholder_snapshot(output, &records)?;

    let (rows, summary) = enrich_records(&records, options, progress);
    table::write_snapshot(output, &rows)?;

    log::info!("catalog export clean complete: {}", output.display());
    Ok(summary)
}
