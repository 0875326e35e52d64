/// Errors that can occur during catalog table operations.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row that could not be read or deserialized. Fatal to the batch:
    /// processing stops at this row index.
    #[error("row {index}: {message}")]
    Row { index: usize, message: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl TableError {
    pub fn row(index: usize, message: impl Into<String>) -> Self {
        Self::Row {
            index,
            message: message.into(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
