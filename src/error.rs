//! Error types for decode operations

use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, DecodeError>;

/// A structural decode failure.
///
/// Raised only when an input byte stream is not parsable at all, or when a
/// required identity field is absent or wrong-typed. Descriptive fields
/// never produce one of these; they fall back to their defaults instead.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),
}
