//! Fixed vocabularies for the metadata estimator and resolver.
//!
//! Every derived technical attribute is drawn from one of the closed
//! tables below. The tables are pure data; the token scanning that feeds
//! them lives with the estimator.

/// Frame-rate tokens recognized in asset names, longest-first so a scan
/// never matches `23` inside `23976`.
pub const FRAMERATE_TOKENS: &[&str] = &[
    "23976", "2398", "2997", "5994", "720P", "NTSC", "PAL", "24P", "23", "25", "29", "59",
];

/// Map a matched frame-rate token to the canonical rate string.
///
/// Total over the token vocabulary; anything outside it yields `"00"`,
/// the out-of-band "undetermined" rate.
pub fn map_framerate(token: &str) -> &'static str {
    match token {
        "23" => "23.98",
        "2398" => "23.98",
        "23976" => "23.976",
        "24P" => "24",
        "25" => "25",
        "29" => "29.97",
        "2997" => "29.97",
        "59" => "59.94",
        "5994" => "59.94",
        "720P" => "59.94",
        "NTSC" => "29.97",
        "PAL" => "25",
        _ => "00",
    }
}

/// Line-count tokens recognized in asset names.
pub const RESOLUTION_TOKENS: &[&str] = &["525", "625", "720", "1080", "2160"];

/// Map a matched line-count token to a (width, height) pair.
pub fn map_resolution(token: &str) -> Option<(&'static str, &'static str)> {
    match token {
        "525" => Some(("720", "486")),
        "625" => Some(("720", "576")),
        "720" => Some(("1280", "720")),
        "1080" => Some(("1920", "1080")),
        "2160" => Some(("3840", "2160")),
        _ => None,
    }
}

/// Codec tokens recognized in asset names.
pub const CODEC_TOKENS: &[&str] = &["UHD", "XAVC", "PRORES", "XDCAM", "DNX", "IMX50", "DV100"];

/// Normalize a matched codec token to its canonical codec name.
///
/// `DNXHD` is the Avid marketing name for VC-3; a bare `UHD` marker means
/// the XAVC house format. Everything else passes through unchanged.
pub fn normalize_codec(token: &str) -> &str {
    match token {
        "DNXHD" => "VC-3",
        "UHD" => "XAVC",
        other => other,
    }
}

/// Remap the two known sensor/container misdetections to the intended HD
/// resolution. 1888x1062 and 640x360 are artifacts of anamorphic and
/// letterboxed proxies in the source catalog; both stand in for 1920x1080.
/// Idempotent: the corrected pair maps to itself.
pub fn correct_resolution(width: String, height: String) -> (String, String) {
    if (width == "1888" && height == "1062") || (width == "640" && height == "360") {
        ("1920".to_string(), "1080".to_string())
    } else {
        (width, height)
    }
}
