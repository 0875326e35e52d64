use serde::{Deserialize, Serialize};

use crate::title_type::TitleType;

/// Out-of-band marker written for any derived field with no value.
///
/// Inside the pipeline absence is always a real `None`; the marker text
/// appears only at the serialization boundary.
pub const NO_VALUE: &str = "NULL";

/// One row of a catalog export, as read from the merged input table.
///
/// `FILESIZE` and `CONTENTLENGTH` are kept as raw text: exports routinely
/// carry them as floats or blanks, and a malformed value must fail the
/// estimator for that record rather than the whole read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "METAXML")]
    pub metaxml: Option<String>,
    #[serde(rename = "GUID")]
    pub guid: String,
    #[serde(rename = "FILESIZE")]
    pub filesize: String,
    #[serde(rename = "CONTENTLENGTH")]
    pub contentlength: String,
    #[serde(rename = "SOURCECREATEDT")]
    pub source_created: String,
    /// Join marker from the two merged source tables; only rows marked
    /// `both` survive into the output.
    #[serde(rename = "_merge")]
    pub merge: String,
}

/// Technical attributes produced by the metadata resolver or estimator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TechInfo {
    pub framerate: Option<String>,
    pub codec: Option<String>,
    pub v_width: Option<String>,
    pub v_height: Option<String>,
    pub duration_ms: Option<i64>,
    /// Resolved or synthesized media filename; consumed by the sidecar
    /// writer downstream, never serialized into the table itself.
    pub filename: Option<String>,
}

/// The derived columns accumulated for one record as it moves through the
/// pipeline. Every stage returns a new value; nothing is mutated in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Enrichment {
    pub title_type: Option<TitleType>,
    pub content_type: Option<String>,
    pub traffic_code: Option<String>,
    pub framerate: Option<String>,
    pub codec: Option<String>,
    pub v_width: Option<String>,
    pub v_height: Option<String>,
    pub duration_ms: Option<i64>,
}

impl Enrichment {
    /// Fold resolved or estimated technical attributes into the record.
    pub fn with_tech(mut self, tech: &TechInfo) -> Self {
        self.framerate = tech.framerate.clone();
        self.codec = tech.codec.clone();
        self.v_width = tech.v_width.clone();
        self.v_height = tech.v_height.clone();
        self.duration_ms = tech.duration_ms;
        self
    }
}

/// One fully enriched output row: the input columns (with the normalized
/// NAME and METAXML) plus the derived columns, absent values rendered as
/// the `NULL` marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "METAXML")]
    pub metaxml: String,
    #[serde(rename = "GUID")]
    pub guid: String,
    #[serde(rename = "FILESIZE")]
    pub filesize: String,
    #[serde(rename = "CONTENTLENGTH")]
    pub contentlength: String,
    #[serde(rename = "SOURCECREATEDT")]
    pub source_created: String,
    #[serde(rename = "_merge")]
    pub merge: String,
    #[serde(rename = "TITLETYPE")]
    pub title_type: String,
    #[serde(rename = "CONTENT_TYPE")]
    pub content_type: String,
    #[serde(rename = "TRAFFIC_CODE")]
    pub traffic_code: String,
    #[serde(rename = "FRAMERATE")]
    pub framerate: String,
    #[serde(rename = "CODEC")]
    pub codec: String,
    #[serde(rename = "V_WIDTH")]
    pub v_width: String,
    #[serde(rename = "V_HEIGHT")]
    pub v_height: String,
    #[serde(rename = "DURATION_MS")]
    pub duration_ms: String,
    /// Reserved for the downstream sidecar writer; always written as 0.
    #[serde(rename = "XML_CREATED")]
    pub xml_created: u8,
}

impl OutputRecord {
    /// Assemble the output row from a (normalized) input record and its
    /// enrichment, converting absence to the `NULL` marker text.
    pub fn assemble(record: &RawRecord, enrichment: &Enrichment) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_else(|| NO_VALUE.to_string());
        Self {
            name: record.name.clone(),
            metaxml: record
                .metaxml
                .clone()
                .unwrap_or_else(|| NO_VALUE.to_string()),
            guid: record.guid.clone(),
            filesize: record.filesize.clone(),
            contentlength: record.contentlength.clone(),
            source_created: record.source_created.clone(),
            merge: record.merge.clone(),
            title_type: enrichment
                .title_type
                .map(|t| t.as_str().to_string())
                .unwrap_or_else(|| NO_VALUE.to_string()),
            content_type: text(&enrichment.content_type),
            traffic_code: text(&enrichment.traffic_code),
            framerate: text(&enrichment.framerate),
            codec: text(&enrichment.codec),
            v_width: text(&enrichment.v_width),
            v_height: text(&enrichment.v_height),
            duration_ms: enrichment
                .duration_ms
                .map(|d| d.to_string())
                .unwrap_or_else(|| NO_VALUE.to_string()),
            xml_created: 0,
        }
    }
}
