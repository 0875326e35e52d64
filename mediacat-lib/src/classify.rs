//! Content-type classification from name-convention markers.
//!
//! Asset names carry `_`-prefixed segment markers for video content
//! (viewing masters, edit masters, UHD masters) and for archive content
//! (NLE project bundles, graphics packages, audio stems). Archive markers
//! describe the more specific packaging format, so they take precedence
//! whenever both classes appear in one name.

use mediacat_core::TitleType;

/// Segment markers identifying video content.
pub const VIDEO_MARKERS: &[&str] = &["_VM", "_EM", "_UHD"];

/// Segment markers identifying archive content.
pub const ARCHIVE_MARKERS: &[&str] = &["_AVP", "_PPRO", "_FCP", "_PTS", "_GRFX", "_GFX", "_WAV"];

/// The classifier's verdict for one name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub title_type: Option<TitleType>,
    /// Normalized tag from the matched marker, separators stripped.
    pub content_type: Option<String>,
}

/// Classify a normalized name. Total: every name yields exactly one of
/// video, archive, or no classification.
pub fn classify_name(name: &str) -> Classification {
    let video = find_marker(name, VIDEO_MARKERS);
    let archive = find_marker(name, ARCHIVE_MARKERS);

    match (video, archive) {
        (Some(marker), None) => Classification {
            title_type: Some(TitleType::Video),
            content_type: Some(strip_separators(marker)),
        },
        // Archive wins over video when both marker classes are present.
        (_, Some(marker)) => Classification {
            title_type: Some(TitleType::Archive),
            content_type: Some(strip_separators(marker)),
        },
        (None, None) => Classification::default(),
    }
}

/// Leftmost occurrence of any marker from the set.
fn find_marker(name: &str, markers: &[&'static str]) -> Option<&'static str> {
    markers
        .iter()
        .filter_map(|marker| name.find(marker).map(|at| (at, *marker)))
        .min_by_key(|(at, _)| *at)
        .map(|(_, marker)| marker)
}

fn strip_separators(marker: &str) -> String {
    marker
        .chars()
        .filter(|c| !matches!(c, '_' | '-'))
        .collect()
}
