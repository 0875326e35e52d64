//! Catalog record data model and fixed enrichment vocabularies.
//!
//! This crate defines the row types flowing through the enrichment
//! pipeline and the closed value tables (frame rates, resolutions, codec
//! normalization) without any I/O dependencies. Consumers use these types
//! directly for classification, metadata resolution, and serialization.

pub mod record;
pub mod title_type;
pub mod vocab;

pub use record::{Enrichment, OutputRecord, RawRecord, TechInfo, NO_VALUE};
pub use title_type::TitleType;
