//! Decoding for the ISO-8859-1 encoded source files.
//!
//! The DEC catalog exports and the postal-code registry are published as
//! Latin-1 text, which is not valid UTF-8 wherever accented place names
//! appear. Latin-1 maps byte values directly onto the first 256 Unicode
//! code points, so decoding is a total function with no error cases.

/// Decode an ISO-8859-1 byte buffer into an owned `String`.
pub fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
