//! Library records

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A content library on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    /// Server-assigned identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Root folder on the server
    pub root: String,
}

impl Library {
    /// Decode a library record from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Decode a list of library records from JSON bytes.
    pub fn list_from_json(bytes: &[u8]) -> Result<Vec<Self>> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
