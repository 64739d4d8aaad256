//! Error types for signpost core.

use thiserror::Error;

/// Errors that can occur while decoding or verifying a record.
///
/// Every variant is a normal control-flow result. Malformed input from the
/// network must never panic or abort the process.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Address text is not the canonical `0x` + 64 hex form.
    #[error("invalid address")]
    InvalidAddress,

    /// Signature text is not the canonical `0x` + 128 hex form.
    #[error("invalid signature encoding")]
    InvalidSignatureEncoding,

    /// Value exceeds the maximum allowed size.
    #[error("value too large: {len} bytes (max {max})")]
    ValueTooLarge { len: usize, max: usize },

    /// Key bytes do not decode to a valid Ed25519 public key.
    #[error("invalid public key")]
    InvalidPublicKey,

    /// The signature does not verify against the address and message.
    #[error("signature mismatch")]
    SignatureMismatch,

    /// The raw payload could not be decoded into a record.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}
