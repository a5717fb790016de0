//! Header-name column resolution shared by the dataset parsers.
//!
//! The source files carry more columns than the navigator uses and their
//! ordering differs between dataset releases, so every parser resolves the
//! columns it needs by header name and fails fast when one is absent.

use csv::StringRecord;
use std::str::FromStr;

use crate::error::{DecError, Result};

/// Find the index of `name` in the header row, trimming surrounding
/// whitespace on each header cell.
pub(crate) fn column_index(headers: &StringRecord, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or(DecError::MissingColumn(name))
}

/// Fetch the cell at `idx` as a trimmed string slice. Missing cells in a
/// short row read as the empty string.
pub(crate) fn field<'r>(record: &'r StringRecord, idx: usize) -> &'r str {
    record.get(idx).unwrap_or("").trim()
}

/// Parse the cell at `idx` into `T`, reporting the offending line and value
/// on failure.
pub(crate) fn parse_field<T: FromStr>(
    record: &StringRecord,
    idx: usize,
    column: &'static str,
) -> Result<T> {
    let raw = field(record, idx);
    raw.parse().map_err(|_| DecError::InvalidField {
        column,
        line: record.position().map_or(0, |p| p.line()),
        value: raw.to_string(),
    })
}
