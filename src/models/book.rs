//! Book records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lenient;

/// A single book inside a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Server-assigned identifier
    pub id: String,
    /// Owning series
    #[serde(rename = "seriesId")]
    pub series_id: String,
    /// Book name as stored on the server
    pub name: String,
    /// Position within the series
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub number: i64,
    /// Server-side resource path
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub url: String,
    /// Media analysis results; fully defaulted when the server omits them
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub media: BookMedia,
    /// Descriptive metadata; fully defaulted when the server omits it
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub metadata: BookMetadata,
}

/// Media analysis state for a book file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMedia {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: String,
    #[serde(rename = "mediaType", default, deserialize_with = "lenient::or_default")]
    pub media_type: String,
    #[serde(rename = "pagesCount", default, deserialize_with = "lenient::or_default")]
    pub pages_count: i64,
}

/// Descriptive book metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMetadata {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub summary: String,
    /// Issue number as printed, which is not always numeric
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub number: String,
    #[serde(rename = "releaseDate", default, deserialize_with = "lenient::or_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub authors: Vec<Author>,
}

/// A credited author with their role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub role: String,
}

impl Book {
    /// Decode a book record from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// First credited author whose role matches, case-insensitively.
    pub fn author_with_role(&self, role: &str) -> Option<&str> {
        self.metadata
            .authors
            .iter()
            .find(|author| author.role.eq_ignore_ascii_case(role))
            .map(|author| author.name.as_str())
    }

    /// Writer credit, if any.
    pub fn writer(&self) -> Option<&str> {
        self.author_with_role("writer")
    }

    /// Penciller credit, if any.
    pub fn penciller(&self) -> Option<&str> {
        self.author_with_role("penciller")
    }

    /// Inker credit, if any.
    pub fn inker(&self) -> Option<&str> {
        self.author_with_role("inker")
    }
}
