//! Response definitions
//!
//! The JSON envelope returned by every boundary export.

use std::ffi::{c_char, CString};

use serde::{Deserialize, Serialize};

use crate::error::FormStoreError;
use crate::record::RecordMap;

/// Message reported by a successful save
pub const SAVE_OK_MESSAGE: &str = "Data saved successfully";

/// Returned if the envelope itself cannot be encoded
const FALLBACK_RESPONSE: &std::ffi::CStr =
    c"{\"success\":false,\"message\":\"\",\"error\":\"failed to encode response\",\"data\":[]}";

/// Uniform response envelope
///
/// Save responses carry `message`, list responses carry `data`; the unused
/// field is left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<RecordMap>>,
}

impl OperationResponse {
    /// Response for a completed save
    pub fn saved() -> Self {
        Self {
            success: true,
            message: Some(SAVE_OK_MESSAGE.to_string()),
            error: String::new(),
            data: None,
        }
    }

    /// Response for a failed save
    pub fn save_failed(err: &FormStoreError) -> Self {
        Self {
            success: false,
            message: Some(String::new()),
            error: err.to_string(),
            data: None,
        }
    }

    /// Response carrying the listed records
    pub fn listed(data: Vec<RecordMap>) -> Self {
        Self {
            success: true,
            message: None,
            error: String::new(),
            data: Some(data),
        }
    }

    /// Response for a failed list; `data` is present and empty
    pub fn list_failed(err: &FormStoreError) -> Self {
        Self {
            success: false,
            message: None,
            error: err.to_string(),
            data: Some(Vec::new()),
        }
    }

    /// Encode as JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Encode into a heap buffer owned by the caller
    ///
    /// Never returns NULL. Release with `FreeFormString`.
    pub fn into_raw(self) -> *mut c_char {
        let encoded = self
            .to_json()
            .ok()
            .and_then(|json| CString::new(json).ok())
            .unwrap_or_else(|| FALLBACK_RESPONSE.to_owned());
        encoded.into_raw()
    }
}
