//! Technical-metadata resolution for catalog records.
//!
//! A record's frame rate, codec, resolution, and duration come from one of
//! two places: the sidecar XML blob when the asset is a video and the blob
//! is parseable, or a heuristic estimate from the filename and file size
//! otherwise. [`resolve_or_estimate`] is the single entry point; the
//! outcome says which path produced the values.

pub mod error;
pub mod estimate;
pub mod sidecar;

pub use error::MetaError;
pub use estimate::estimate;
pub use sidecar::{extract_sidecar, sanitize_sidecar};

use mediacat_core::{RawRecord, TechInfo, TitleType};

/// How (or whether) a record's technical attributes were obtained.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaInfo {
    /// Extracted from the sidecar metadata blob.
    Resolved(TechInfo),
    /// Derived from filename conventions and file size.
    Estimated(TechInfo),
    /// Neither path produced values; every attribute stays absent.
    Unavailable,
}

impl MediaInfo {
    pub fn tech(&self) -> Option<&TechInfo> {
        match self {
            Self::Resolved(t) | Self::Estimated(t) => Some(t),
            Self::Unavailable => None,
        }
    }
}

/// True when a METAXML cell actually carries a blob. Exports encode
/// absence as an empty cell, the `NULL` marker, or a stringified NaN.
pub fn sidecar_present(metaxml: Option<&str>) -> bool {
    metaxml.is_some_and(|s| {
        !s.is_empty() && s != mediacat_core::NO_VALUE && !s.eq_ignore_ascii_case("nan")
    })
}

/// Resolve technical attributes from the sidecar when the preconditions
/// hold (video title, blob present), estimating otherwise.
///
/// The decision is made by inspecting preconditions up front, not by
/// catching faults: a blob that fails extraction even after sanitization
/// falls through to estimation, and a record that defeats estimation too
/// comes back [`MediaInfo::Unavailable`] with every field absent.
pub fn resolve_or_estimate(record: &RawRecord, title_type: Option<TitleType>) -> MediaInfo {
    log::info!("getting mediainfo for {}", record.name);

    if title_type == Some(TitleType::Video) && sidecar_present(record.metaxml.as_deref()) {
        let xml = record.metaxml.as_deref().unwrap_or_default();
        let cleaned = sanitize_sidecar(&record.name, xml);
        match extract_sidecar(&cleaned) {
            Ok(tech) => return MediaInfo::Resolved(tech),
            Err(e) => {
                log::error!(
                    "sidecar extraction failed for {} - {}: {e}; estimating instead",
                    record.guid,
                    record.name
                );
            }
        }
    }

    match estimate(record) {
        Ok(tech) => MediaInfo::Estimated(tech),
        Err(e) => {
            log::error!(
                "estimation failed for {} - {}: {e}",
                record.guid,
                record.name
            );
            MediaInfo::Unavailable
        }
    }
}
