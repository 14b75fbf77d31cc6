//! Page records

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lenient;

/// A single page of a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number within the book; identifies the page
    pub number: i64,
    /// File name inside the archive
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// MIME type reported by the server
    #[serde(rename = "mediaType", default, deserialize_with = "lenient::or_default")]
    pub media_type: String,
}

impl Page {
    /// Decode a page record from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Decode the page listing of a book from JSON bytes.
    pub fn list_from_json(bytes: &[u8]) -> Result<Vec<Self>> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
