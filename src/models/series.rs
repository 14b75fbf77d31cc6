//! Series records

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lenient;

/// A series inside a library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    /// Server-assigned identifier
    pub id: String,
    /// Owning library
    #[serde(rename = "libraryId")]
    pub library_id: String,
    /// Series name as stored on the server
    pub name: String,
    /// Number of books in the series
    #[serde(rename = "booksCount", default, deserialize_with = "lenient::or_default")]
    pub books_count: i64,
    /// Server-side resource path
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub url: String,
    /// Descriptive metadata; fully defaulted when the server omits it
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub metadata: SeriesMetadata,
}

/// Descriptive series metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesMetadata {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub publisher: String,
}

impl Series {
    /// Decode a series record from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Name suitable for display, with any leading year folded into a
    /// volume suffix.
    pub fn display_name(&self) -> String {
        format_series_name(&self.name)
    }
}

static YEAR_PREFIX: OnceLock<Regex> = OnceLock::new();

fn year_prefix() -> &'static Regex {
    YEAR_PREFIX.get_or_init(|| Regex::new(r"^(\d{4})\s+(.+)$").unwrap())
}

/// Rewrite a "1998 Danger Girl" style name as "Danger Girl Vol.1998".
///
/// Names without a leading four-digit year pass through unchanged.
pub fn format_series_name(name: &str) -> String {
    match year_prefix().captures(name) {
        Some(caps) => format!("{} Vol.{}", &caps[2], &caps[1]),
        None => name.to_string(),
    }
}
