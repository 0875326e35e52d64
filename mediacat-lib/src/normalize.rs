//! Record normalization, the first pipeline stage.
//!
//! Display names are upper-cased, and the `&` character is spelled out as
//! `and` because it breaks both the downstream spreadsheet tooling and the
//! sidecar XML. The same substitution is applied independently to the
//! sidecar blob, together with backslash path normalization.

use mediacat_core::RawRecord;

/// What the normalizer changed, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOutcome {
    pub name_substituted: bool,
    pub sidecar_substituted: bool,
}

/// Upper-case a display name and replace `&` with the literal `and`.
pub fn clean_name(name: &str) -> (String, bool) {
    let upper = name.to_uppercase();
    if upper.contains('&') {
        (upper.replace('&', "and"), true)
    } else {
        (upper, false)
    }
}

/// Apply the `&` substitution inside a sidecar blob and normalize
/// backslash path separators to forward slashes.
pub fn clean_sidecar(xml: &str) -> (String, bool) {
    let substituted = xml.contains('&');
    let cleaned = if substituted {
        xml.replace('&', "and")
    } else {
        xml.to_string()
    };
    (cleaned.replace('\\', "/"), substituted)
}

/// Produce the normalized form of a record. The input is never mutated;
/// derived columns start out absent on the enrichment side.
pub fn normalize_record(record: &RawRecord) -> (RawRecord, NormalizeOutcome) {
    let (name, name_substituted) = clean_name(&record.name);

    let (metaxml, sidecar_substituted) = match record.metaxml.as_deref() {
        Some(xml) => {
            let (cleaned, substituted) = clean_sidecar(xml);
            (Some(cleaned), substituted)
        }
        None => (None, false),
    };

    let normalized = RawRecord {
        name,
        metaxml,
        ..record.clone()
    };
    (
        normalized,
        NormalizeOutcome {
            name_substituted,
            sidecar_substituted,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_uppercased() {
        let (name, changed) = clean_name("012345_show_vm");
        assert_eq!(name, "012345_SHOW_VM");
        assert!(!changed);
    }

    #[test]
    fn ampersand_becomes_and() {
        let (name, changed) = clean_name("012345_lock&key_vm");
        assert_eq!(name, "012345_LOCKandKEY_VM");
        assert!(changed);
    }

    #[test]
    fn sidecar_substitution_and_slashes() {
        let (xml, changed) = clean_sidecar(r"<FileName>a\b & c.mov</FileName>");
        assert_eq!(xml, "<FileName>a/b and c.mov</FileName>");
        assert!(changed);
    }

    #[test]
    fn sidecar_without_ampersand_only_fixes_slashes() {
        let (xml, changed) = clean_sidecar(r"<FileName>a\b.mov</FileName>");
        assert_eq!(xml, "<FileName>a/b.mov</FileName>");
        assert!(!changed);
    }

    #[test]
    fn normalize_record_leaves_other_fields_alone() {
        let record = RawRecord {
            name: "012345_show & co_vm".to_string(),
            metaxml: Some("<a>x & y</a>".to_string()),
            guid: "g".to_string(),
            filesize: "10".to_string(),
            contentlength: "5".to_string(),
            source_created: "2022-01-01 00:00:00".to_string(),
            merge: "both".to_string(),
        };
        let (normalized, outcome) = normalize_record(&record);
        assert_eq!(normalized.name, "012345_SHOW and CO_VM");
        assert_eq!(normalized.metaxml.as_deref(), Some("<a>x and y</a>"));
        assert_eq!(normalized.guid, "g");
        assert!(outcome.name_substituted);
        assert!(outcome.sidecar_substituted);
    }
}
