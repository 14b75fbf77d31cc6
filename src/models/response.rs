//! Paginated listing envelope

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lenient;

/// One page of a paginated listing response.
///
/// Series and book listings arrive wrapped in this envelope. The counters
/// are descriptive; only the content itself is decoded strictly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct PagedResponse<T> {
    /// Records on this page
    #[serde(default)]
    pub content: Vec<T>,
    /// Zero-based page index
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub number: i64,
    /// Total records across all pages
    #[serde(rename = "totalElements", default, deserialize_with = "lenient::or_default")]
    pub total_elements: i64,
    /// Total page count
    #[serde(rename = "totalPages", default, deserialize_with = "lenient::or_default")]
    pub total_pages: i64,
    /// Whether this is the final page
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub last: bool,
}

impl<T: DeserializeOwned> PagedResponse<T> {
    /// Decode a listing envelope from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
