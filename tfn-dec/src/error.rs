/// Error types for dataset loading
use thiserror::Error;

/// Main error type for reference-dataset parsing.
///
/// All variants are fatal at startup: the navigator never recovers from a
/// malformed reference file, it reports the problem and exits.
#[derive(Error, Debug)]
pub enum DecError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the file header
    #[error("Missing expected column: {0}")]
    MissingColumn(&'static str),

    /// A cell could not be parsed into its declared type
    #[error("Invalid value {value:?} in column {column} at line {line}")]
    InvalidField {
        column: &'static str,
        line: u64,
        value: String,
    },
}

/// Type alias for Results using DecError
pub type Result<T> = std::result::Result<T, DecError>;
