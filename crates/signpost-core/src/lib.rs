//! # Signpost Core
//!
//! Pure primitives for the signpost publishing service: addresses, signed
//! records, wire decoding, and verification.
//!
//! This crate contains no I/O, no storage, no shared state. It is pure
//! computation over client-submitted data.
//!
//! ## Key Types
//!
//! - [`Address`] - Canonical identifier derived from an Ed25519 public key
//! - [`SignedRecord`] - One published value, as it travels on the wire
//! - [`Keypair`] - Client-side signing identity
//! - [`RecordBuilder`] - Creates and signs records
//!
//! ## Verification
//!
//! [`verify_record`] decides whether a claimed write is authentic: the
//! signature must cover the exact byte concatenation of the record's
//! timestamp and value, checked against the key the address encodes. See
//! the [`verify`] module.

pub mod address;
pub mod crypto;
pub mod error;
pub mod record;
pub mod verify;
pub mod wire;

pub use address::{Address, ADDRESS_LEN, ADDRESS_PREFIX};
pub use crypto::{Keypair, PublicKey, Signature};
pub use error::CoreError;
pub use record::{RecordBuilder, SignedRecord, MAX_DATA_SIZE, SIGNATURE_TEXT_LEN};
pub use verify::{record_is_valid, verify_record};
