/// Errors that can occur while resolving or estimating technical metadata.
#[derive(Debug, thiserror::Error)]
pub enum MetaError {
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("invalid {field} value: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

impl MetaError {
    pub fn invalid_number(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            value: value.into(),
        }
    }
}
