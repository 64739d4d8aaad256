//! SignedRecord: one published value, as it travels on the wire.
//!
//! All fields are strings, exactly as clients submit them. Nothing in a
//! record is trusted until [`verify_record`](crate::verify::verify_record)
//! has accepted it: the display name is attacker-controlled labeling and the
//! timestamp is a caller-supplied display string that is never checked
//! against a clock. Only `timestamp ++ value` is covered by the signature.

use serde::{Deserialize, Serialize};

use crate::address::ADDRESS_PREFIX;
use crate::crypto::{Keypair, Signature};
use crate::error::CoreError;

/// Maximum value size in bytes (10 KiB).
pub const MAX_DATA_SIZE: usize = 10 * 1024;

/// Signature text length: 2-char prefix + 128 hex digits (64 bytes).
pub const SIGNATURE_TEXT_LEN: usize = 130;

/// A signed value published for one address.
///
/// Wire field names are fixed: `Address`, `DisplayName`, `DT`, `Value`,
/// `Signature`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedRecord {
    /// The owning address: `0x` + 64 hex digits of the signer's public key.
    #[serde(rename = "Address")]
    pub address: String,

    /// Free-form label. Not covered by the signature, not trusted.
    #[serde(rename = "DisplayName", default)]
    pub display_name: String,

    /// Caller-supplied creation time, display only.
    #[serde(rename = "DT", default)]
    pub timestamp: String,

    /// The published payload, at most [`MAX_DATA_SIZE`] bytes.
    #[serde(rename = "Value")]
    pub value: String,

    /// `0x` + 128 hex digits of the Ed25519 signature over
    /// `timestamp ++ value`.
    #[serde(rename = "Signature")]
    pub signature: String,
}

impl SignedRecord {
    /// The exact bytes the signature covers: timestamp, then value, no
    /// delimiter, no re-encoding.
    pub fn signed_message(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.timestamp.len() + self.value.len());
        buf.extend_from_slice(self.timestamp.as_bytes());
        buf.extend_from_slice(self.value.as_bytes());
        buf
    }

    /// Decode the signature field into raw bytes.
    pub fn signature_bytes(&self) -> Result<Signature, CoreError> {
        if self.signature.len() != SIGNATURE_TEXT_LEN || !self.signature.starts_with(ADDRESS_PREFIX)
        {
            return Err(CoreError::InvalidSignatureEncoding);
        }
        Signature::from_hex(&self.signature[ADDRESS_PREFIX.len()..])
            .map_err(|_| CoreError::InvalidSignatureEncoding)
    }
}

/// Builder for creating and signing records on the client side.
///
/// ```
/// use signpost_core::{Keypair, RecordBuilder};
///
/// let keypair = Keypair::generate();
/// let record = RecordBuilder::new("sensor-7")
///     .timestamp("2026-08-06 12:00:00")
///     .value("21.5C")
///     .sign(&keypair);
///
/// assert_eq!(record.address, keypair.address().as_str());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    display_name: String,
    timestamp: String,
    value: String,
}

impl RecordBuilder {
    /// Start a record with the given display name.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            timestamp: String::new(),
            value: String::new(),
        }
    }

    /// Set the caller-supplied timestamp string.
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Set the value to publish.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sign `timestamp ++ value` and produce the wire record.
    pub fn sign(self, keypair: &Keypair) -> SignedRecord {
        let mut message =
            Vec::with_capacity(self.timestamp.len() + self.value.len());
        message.extend_from_slice(self.timestamp.as_bytes());
        message.extend_from_slice(self.value.as_bytes());
        let signature = keypair.sign(&message);

        SignedRecord {
            address: keypair.address().as_str().to_string(),
            display_name: self.display_name,
            timestamp: self.timestamp,
            value: self.value,
            signature: format!("{}{}", ADDRESS_PREFIX, signature.to_hex()),
        }
    }
}
