//! End-to-end enrichment scenarios over single records.

use std::cell::RefCell;

use mediacat_core::{RawRecord, TitleType};
use mediacat_lib::pipeline::{EnrichEvent, MediaPath, enrich_record};

fn record(name: &str, metaxml: Option<&str>, filesize: &str, contentlength: &str) -> RawRecord {
    RawRecord {
        name: name.to_string(),
        metaxml: metaxml.map(str::to_string),
        guid: "guid-e2e".to_string(),
        filesize: filesize.to_string(),
        contentlength: contentlength.to_string(),
        source_created: "2017-09-18 10:30:00".to_string(),
        merge: "both".to_string(),
    }
}

#[test]
fn unmarked_prores_master_estimates_from_size_band() {
    let r = record(
        "051637_AIRPORTSECURITY_1080_2997I_PRORESHQ_TEXTLESS_091817",
        None,
        "50000000000",
        "1000",
    );
    let (_, enrichment, path) = enrich_record(0, &r, &|_| {});

    // No marker segment: unclassified, but the technical fields still
    // come from the estimator.
    assert_eq!(path, MediaPath::Estimated);
    assert_eq!(enrichment.title_type, None);
    assert_eq!(enrichment.content_type, None);
    assert_eq!(enrichment.traffic_code.as_deref(), Some("=\"051637\""));
    assert_eq!(enrichment.codec.as_deref(), Some("PRORES"));
    assert_eq!(enrichment.framerate.as_deref(), Some("29.97"));
    // 50 GB sits inside the 18-200 GB band, so the size rule wins over
    // the 1080 name token (same answer here, different rule).
    assert_eq!(enrichment.v_width.as_deref(), Some("1920"));
    assert_eq!(enrichment.v_height.as_deref(), Some("1080"));
    assert_eq!(enrichment.duration_ms, Some(1_000_000));
}

#[test]
fn uhd_master_classifies_video_and_takes_uhd_resolution_rule() {
    let r = record("012345_SHOW_S01E01_UHD_PRORES", None, "1000000", "600");
    let (_, enrichment, path) = enrich_record(0, &r, &|_| {});

    assert_eq!(path, MediaPath::Estimated);
    assert_eq!(enrichment.title_type, Some(TitleType::Video));
    assert_eq!(enrichment.content_type.as_deref(), Some("UHD"));
    // The UHD segment is the leftmost codec token, normalizing to XAVC
    // and driving the UHD resolution rule.
    assert_eq!(enrichment.codec.as_deref(), Some("XAVC"));
    assert_eq!(enrichment.v_width.as_deref(), Some("3840"));
    assert_eq!(enrichment.v_height.as_deref(), Some("2160"));
}

#[test]
fn prores_master_without_uhd_class_takes_token_rule() {
    let r = record("012345_SHOW_S01E01_EM_PRORES_1080", None, "1000000", "600");
    let (_, enrichment, _) = enrich_record(0, &r, &|_| {});

    assert_eq!(enrichment.title_type, Some(TitleType::Video));
    assert_eq!(enrichment.content_type.as_deref(), Some("EM"));
    // PRORES is not UHD-class; too small for the size band, so the 1080
    // name token decides.
    assert_eq!(enrichment.codec.as_deref(), Some("PRORES"));
    assert_eq!(enrichment.v_width.as_deref(), Some("1920"));
    assert_eq!(enrichment.v_height.as_deref(), Some("1080"));
}

#[test]
fn archive_marker_takes_precedence_over_video_marker() {
    let r = record("012345_SHOW_VM_AVP", None, "1000", "60");
    let (_, enrichment, _) = enrich_record(0, &r, &|_| {});

    assert_eq!(enrichment.title_type, Some(TitleType::Archive));
    assert_eq!(enrichment.content_type.as_deref(), Some("AVP"));
}

#[test]
fn sanitizable_blob_resolves_instead_of_estimating() {
    let r = record(
        "012345_SHOW_VM",
        Some("<a>bad & unescaped</a>"),
        "1000",
        "60",
    );
    let (_, _, path) = enrich_record(0, &r, &|_| {});
    assert_eq!(path, MediaPath::Resolved);
}

#[test]
fn absent_blob_on_video_goes_straight_to_estimation() {
    for blob in [None, Some(""), Some("NULL")] {
        let r = record("012345_SHOW_1080_PRORES_VM", blob, "1000", "60");
        let (_, enrichment, path) = enrich_record(0, &r, &|_| {});
        assert_eq!(path, MediaPath::Estimated, "blob {blob:?}");
        assert_eq!(enrichment.codec.as_deref(), Some("PRORES"));
    }
}

#[test]
fn resolved_sidecar_values_flow_into_the_record() {
    let sidecar = "<Metadata>\
        <FileName>NLE.012345_SHOW.mov</FileName>\
        <DurationInMs>90000</DurationInMs>\
        <VideoTrack><Video>\
        <AverageFrameRate>23.976</AverageFrameRate>\
        <Format>AVC</Format>\
        <Width>1888</Width><Height>1062</Height>\
        </Video></VideoTrack></Metadata>";
    let r = record("012345_SHOW_EM", Some(sidecar), "1000", "60");
    let (_, enrichment, path) = enrich_record(0, &r, &|_| {});

    assert_eq!(path, MediaPath::Resolved);
    assert_eq!(enrichment.framerate.as_deref(), Some("23.976"));
    assert_eq!(enrichment.codec.as_deref(), Some("AVC"));
    // Anamorphic misdetection corrected on the sidecar path.
    assert_eq!(enrichment.v_width.as_deref(), Some("1920"));
    assert_eq!(enrichment.v_height.as_deref(), Some("1080"));
    assert_eq!(enrichment.duration_ms, Some(90_000));
}

#[test]
fn normalization_events_fire_before_enrichment() {
    let events = RefCell::new(Vec::new());
    let sink = |e: EnrichEvent| events.borrow_mut().push(e);

    let r = record("012345_lock&key_vm", Some("<a>x & y</a>"), "1000", "60");
    let (normalized, _, _) = enrich_record(7, &r, &sink);

    assert_eq!(normalized.name, "012345_LOCKandKEY_VM");
    assert_eq!(normalized.metaxml.as_deref(), Some("<a>x and y</a>"));

    let events = events.into_inner();
    assert!(events.iter().any(
        |e| matches!(e, EnrichEvent::NameSubstituted { index: 7, name } if name.contains("and"))
    ));
    assert!(
        events
            .iter()
            .any(|e| matches!(e, EnrichEvent::SidecarSubstituted { index: 7, .. }))
    );
}

#[test]
fn estimation_failure_leaves_every_technical_field_absent() {
    let r = record("012345_SHOW_1080_PRORES_VM", None, "not-a-size", "60");
    let (_, enrichment, path) = enrich_record(0, &r, &|_| {});

    assert_eq!(path, MediaPath::Unavailable);
    // All-or-nothing: no partial fields despite the parseable 1080/PRORES
    // tokens in the name.
    assert_eq!(enrichment.codec, None);
    assert_eq!(enrichment.framerate, None);
    assert_eq!(enrichment.v_width, None);
    assert_eq!(enrichment.v_height, None);
    assert_eq!(enrichment.duration_ms, None);
    // Classification happened before estimation and survives.
    assert_eq!(enrichment.title_type, Some(TitleType::Video));
}
