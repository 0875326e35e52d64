//! Heuristic metadata estimation from filename conventions and file size.
//!
//! The fallback path when no parseable sidecar exists. Asset names in the
//! source catalog encode codec, frame rate, and line count as `_`-separated
//! segments (`051637_SHOW_1080_2997I_PRORESHQ_...`), so each attribute is
//! recovered by a bounded token scan against a closed vocabulary, with
//! file-size thresholds taking precedence for resolution.

use mediacat_core::vocab::{
    self, CODEC_TOKENS, FRAMERATE_TOKENS, RESOLUTION_TOKENS, map_framerate, map_resolution,
};
use mediacat_core::{RawRecord, TechInfo};

use crate::error::MetaError;

/// File-size band (exclusive bounds) inside which a non-UHD asset with a
/// known duration is assumed to be HD 1920x1080.
const HD_FILESIZE_MIN: i64 = 18_000_000_000;
const HD_FILESIZE_MAX: i64 = 200_000_000_000;

/// Estimate all technical attributes for one record.
///
/// All-or-nothing: a record whose FILESIZE or CONTENTLENGTH cannot be read
/// as a number fails estimation entirely rather than yielding a partial
/// result.
pub fn estimate(record: &RawRecord) -> Result<TechInfo, MetaError> {
    let name = record.name.as_str();
    let filesize = parse_number(&record.filesize, "FILESIZE")?;
    let contentlength = parse_number(&record.contentlength, "CONTENTLENGTH")?;

    let (codec, codec_token) = find_codec(name);
    log::info!(
        "{} - {} - estimating codec from filename",
        record.guid,
        name
    );

    let (mut v_width, mut v_height) =
        est_resolution(record, codec_token.as_deref(), filesize, contentlength);

    // Letterboxed ProRes proxies misreport as 640x360; same correction as
    // the sidecar path.
    if v_width.as_deref() == Some("640")
        && v_height.as_deref() == Some("360")
        && codec.as_deref().is_some_and(|c| c.eq_ignore_ascii_case("PRORES"))
    {
        v_width = Some("1920".to_string());
        v_height = Some("1080".to_string());
        log::info!(
            "{} - {} - filesize: {} - estimating file is HD:1920x1080",
            record.guid,
            name,
            record.filesize
        );
    }

    let framerate = find_framerate(record, name);
    let duration_ms = contentlength.checked_mul(1000).unwrap_or(0);
    let filename = estimated_filename(record, codec.as_deref());

    Ok(TechInfo {
        framerate: Some(framerate),
        codec,
        v_width,
        v_height,
        duration_ms: Some(duration_ms),
        filename: Some(filename),
    })
}

/// Parse a numeric catalog cell. Exports carry these as integers, floats,
/// or `nan`; only a finite value counts.
fn parse_number(raw: &str, field: &'static str) -> Result<i64, MetaError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| MetaError::invalid_number(field, raw))?;
    if !value.is_finite() {
        return Err(MetaError::invalid_number(field, raw));
    }
    Ok(value as i64)
}

/// Scan the name for a codec token.
///
/// A token counts only at a word boundary: start of the name or any
/// non-letter (digits and `_`/`-` separators both qualify), so `DNX` is
/// found in `_DNXHD_` but not inside `ADNX`. Returns the normalized codec
/// name and the raw matched token; the raw token drives the UHD-class
/// resolution rules.
fn find_codec(name: &str) -> (Option<String>, Option<String>) {
    let bytes = name.as_bytes();
    for i in 0..bytes.len() {
        if i > 0 && bytes[i - 1].is_ascii_alphabetic() {
            continue;
        }
        for token in CODEC_TOKENS {
            if matches_ignore_case(bytes, i, token) {
                let raw = token.to_string();
                let codec = vocab::normalize_codec(token).to_string();
                return (Some(codec), Some(raw));
            }
        }
    }
    (None, None)
}

fn matches_ignore_case(bytes: &[u8], at: usize, token: &str) -> bool {
    bytes
        .get(at..at + token.len())
        .is_some_and(|window| window.eq_ignore_ascii_case(token.as_bytes()))
}

/// Scan for a frame-rate token, skipping the 6-character traffic-code
/// prefix so rates are never read out of the leading identifier. A token
/// counts only when not preceded by an alphanumeric character within the
/// scanned region. No match yields the `"00"` undetermined rate.
fn find_framerate(record: &RawRecord, name: &str) -> String {
    let region = match name.char_indices().nth(6) {
        Some((i, _)) => &name[i..],
        None => "",
    };
    let bytes = region.as_bytes();

    for i in 0..bytes.len() {
        if i > 0 && bytes[i - 1].is_ascii_alphanumeric() {
            continue;
        }
        for token in FRAMERATE_TOKENS {
            if bytes[i..].starts_with(token.as_bytes()) {
                let framerate = map_framerate(token);
                log::info!(
                    "{} - {} - framerate {} based on filename",
                    record.guid,
                    name,
                    framerate
                );
                return framerate.to_string();
            }
        }
    }

    log::info!("cannot determine framerate for {name}, setting to 00");
    "00".to_string()
}

/// Estimate resolution, in priority order: the HD file-size band, the
/// UHD codec class, the XDCAM name segment, then the line-count token
/// table. No signal at all leaves both dimensions absent.
fn est_resolution(
    record: &RawRecord,
    codec_token: Option<&str>,
    filesize: i64,
    contentlength: i64,
) -> (Option<String>, Option<String>) {
    let uhd_class = matches!(codec_token, Some("XAVC") | Some("UHD"));
    let name_lower = record.name.to_lowercase();

    if filesize > HD_FILESIZE_MIN
        && filesize < HD_FILESIZE_MAX
        && !uhd_class
        && contentlength != 0
    {
        log::info!(
            "{} - {} - filesize: {} - estimating file is HD: 1920x1080",
            record.guid,
            record.name,
            record.filesize
        );
        return (Some("1920".to_string()), Some("1080".to_string()));
    }

    if uhd_class {
        log::info!(
            "{} - {} - filesize: {} - estimating file is UHD: 3840x2160",
            record.guid,
            record.name,
            record.filesize
        );
        return (Some("3840".to_string()), Some("2160".to_string()));
    }

    if name_lower.contains("_xdcam_") || name_lower.contains("_xdcamhd_") {
        return (Some("1920".to_string()), Some("1080".to_string()));
    }

    if let Some(token) = find_resolution_token(&record.name) {
        if let Some((w, h)) = map_resolution(token) {
            return (Some(w.to_string()), Some(h.to_string()));
        }
    }

    log::info!(
        "{} - {} - cannot determine v_width or v_height, setting to null",
        record.guid,
        record.name
    );
    (None, None)
}

/// Leftmost line-count token anywhere in the name. Unbounded on purpose:
/// the source convention embeds these mid-segment (`1080I`, `2160P`).
fn find_resolution_token(name: &str) -> Option<&'static str> {
    let bytes = name.as_bytes();
    for i in 0..bytes.len() {
        for token in RESOLUTION_TOKENS {
            if bytes[i..].starts_with(token.as_bytes()) {
                return Some(token);
            }
        }
    }
    None
}

/// Synthesize the media filename from the asset name and its creation
/// timestamp, separators stripped. ProRes assets get `.mov`; names ending
/// in `_MXF` keep their MXF container; everything else defaults to `.mov`.
fn estimated_filename(record: &RawRecord, codec: Option<&str>) -> String {
    let stamp: String = record
        .source_created
        .chars()
        .filter(|c| !matches!(c, '-' | ' ' | ':'))
        .collect();

    let prores = codec.is_some_and(|c| c.eq_ignore_ascii_case("PRORES"));
    let extension = if prores {
        "mov"
    } else if record.name.to_ascii_uppercase().ends_with("_MXF") {
        "mxf"
    } else {
        "mov"
    };

    format!("{}_{}.{}", record.name, stamp, extension)
}
