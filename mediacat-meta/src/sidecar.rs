//! Sidecar metadata extraction.
//!
//! Catalog rows may carry an XML fragment describing the underlying media
//! file. The blob is frequently malformed (raw `&` characters smuggled in
//! through file names), so extraction is a two-step affair: a sanitizing
//! pass that makes the common damage parseable, then an event-driven walk
//! that pulls out the technical fields.

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use mediacat_core::TechInfo;
use mediacat_core::vocab::correct_resolution;

use crate::error::MetaError;

/// Element paths (relative to the document root) extracted from a sidecar.
const FRAMERATE_PATH: &str = "VideoTrack/Video/AverageFrameRate";
const CODEC_PATH: &str = "VideoTrack/Video/Format";
const WIDTH_PATH: &str = "VideoTrack/Video/Width";
const HEIGHT_PATH: &str = "VideoTrack/Video/Height";
const DURATION_PATH: &str = "DurationInMs";
const FILENAME_PATH: &str = "FileName";

/// Make a sidecar blob parseable when it carries raw `&` characters.
///
/// If the blob already parses it is returned unchanged. Otherwise every
/// `&` is replaced with the literal `And` (the catalog's own convention,
/// not the `&amp;` entity form) and the result is used as-is without
/// re-validation. Never fails.
pub fn sanitize_sidecar(name: &str, xml: &str) -> String {
    if parses_cleanly(xml) {
        return xml.to_string();
    }

    log::error!("invalid sidecar XML content in {name}");
    let sanitized = xml.replace('&', "And");
    log::info!("sidecar XML for {name} was sanitized");
    sanitized
}

/// Run the reader over the whole document, checking that text nodes also
/// unescape. quick-xml tokenizes a bare `&` without complaint, so the
/// entity check has to be explicit.
fn parses_cleanly(xml: &str) -> bool {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Text(ref e)) => {
                if e.unescape().is_err() {
                    return false;
                }
            }
            Ok(Event::Eof) => return true,
            Ok(_) => {}
            Err(_) => return false,
        }
    }
}

/// Extract technical attributes from a (possibly sanitized) sidecar blob.
///
/// Each field defaults to absent when its path is missing; only a
/// structurally broken document is an error, in which case the caller
/// falls through to estimation.
pub fn extract_sidecar(xml: &str) -> Result<TechInfo, MetaError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    // Path below the root element, e.g. ["VideoTrack", "Video", "Width"].
    let mut path: Vec<String> = Vec::new();
    let mut depth = 0usize;

    let mut framerate: Option<String> = None;
    let mut codec: Option<String> = None;
    let mut width: Option<String> = None;
    let mut height: Option<String> = None;
    let mut duration: Option<String> = None;
    let mut filename: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                depth += 1;
                if depth > 1 {
                    path.push(tag);
                }
            }
            Event::End(_) => {
                if depth > 1 {
                    path.pop();
                }
                depth = depth.saturating_sub(1);
            }
            Event::Text(ref e) => {
                let text = e.unescape()?.to_string();
                let slot = match path.join("/").as_str() {
                    FRAMERATE_PATH => &mut framerate,
                    CODEC_PATH => &mut codec,
                    WIDTH_PATH => &mut width,
                    HEIGHT_PATH => &mut height,
                    DURATION_PATH => &mut duration,
                    FILENAME_PATH => &mut filename,
                    _ => continue,
                };
                // First occurrence wins, matching path lookup semantics.
                if slot.is_none() {
                    *slot = Some(text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let (v_width, v_height) = match (width, height) {
        (Some(w), Some(h)) => {
            let (w, h) = correct_resolution(w, h);
            (Some(w), Some(h))
        }
        other => other,
    };

    Ok(TechInfo {
        framerate,
        codec,
        v_width,
        v_height,
        duration_ms: duration.and_then(|d| d.trim().parse().ok()),
        filename: filename.map(|f| adjust_filename(&f)),
    })
}

/// Strip the fixed-length vendor prefix from a resolved filename:
/// 4 characters for the `NLE.` prefix, 7 for the archive object prefix.
fn adjust_filename(filename: &str) -> String {
    let skip = if filename.starts_with("NLE.") { 4 } else { 7 };
    filename.chars().skip(skip).collect()
}
