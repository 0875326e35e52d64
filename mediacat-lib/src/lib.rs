//! Catalog export enrichment pipeline and its companion utilities.
//!
//! The pipeline takes one merged catalog export, derives title type,
//! content tag, traffic code, and technical metadata for every row, and
//! writes the enriched table back out. The companion modules post-process
//! cleaned exports: routing tags, name repair, token reports, chunking.

pub mod chunk;
pub mod classify;
pub mod error;
pub mod names;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod settings;
pub mod table;
pub mod tagger;
pub mod traffic;

pub use classify::{Classification, classify_name};
pub use error::TableError;
pub use normalize::{clean_name, clean_sidecar, normalize_record};
pub use pipeline::{
    EnrichEvent, EnrichOptions, EnrichSummary, MediaPath, enrich_record, enrich_records,
    enrich_table,
};
pub use tagger::{OutputDir, TagSummary, append_output_dir, output_directory};
pub use traffic::extract_traffic_code;
