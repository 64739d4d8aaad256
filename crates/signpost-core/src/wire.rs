//! Wire decoding: raw inbound payloads into records.
//!
//! The transport accepts a JSON body, or the same JSON hex-wrapped so it
//! can ride inside a URL path segment. Decode failures are client errors;
//! nothing is verified or stored here.

use crate::error::CoreError;
use crate::record::SignedRecord;

/// Decode a JSON payload into a record.
pub fn from_json(data: &[u8]) -> Result<SignedRecord, CoreError> {
    serde_json::from_slice(data).map_err(|e| CoreError::MalformedPayload(e.to_string()))
}

/// Decode a hex-wrapped JSON payload into a record.
pub fn from_json_hex(data: &str) -> Result<SignedRecord, CoreError> {
    let bytes = hex::decode(data).map_err(|e| CoreError::MalformedPayload(e.to_string()))?;
    from_json(&bytes)
}
