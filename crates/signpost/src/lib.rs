//! # Signpost
//!
//! A minimal public key-value publishing core: clients sign a payload with
//! an Ed25519 key, a transport hands the decoded bytes to the core, and
//! any reader can fetch the latest value (and bounded history) by the
//! signer's public-key-derived address.
//!
//! ## Key Concepts
//!
//! - **Address**: `0x` + 64 hex digits of the signer's public key. The only
//!   identity in the system; there is no access control beyond a valid
//!   signature.
//! - **Record**: the current signed value for one address. New valid
//!   writes replace old ones (upsert); records are never deleted.
//! - **History**: per address, the last 10 published values, oldest first.
//! - **Publisher**: the narrow interface a routing layer calls. Explicitly
//!   constructed and cloned, never a global.
//!
//! ## Usage
//!
//! ```
//! use signpost::{Publisher, SetOutcome};
//! use signpost::core::{Keypair, RecordBuilder};
//!
//! let publisher = Publisher::new();
//! let keypair = Keypair::generate();
//!
//! let record = RecordBuilder::new("weather-station")
//!     .timestamp("2026-08-06 12:00:00")
//!     .value("21.5C")
//!     .sign(&keypair);
//!
//! let body = serde_json::to_vec(&record).unwrap();
//! assert!(matches!(
//!     publisher.publish_json(&body).unwrap(),
//!     SetOutcome::Inserted
//! ));
//!
//! let current = publisher.get(&keypair.address()).unwrap();
//! assert_eq!(current.value, "21.5C");
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `signpost::core` - Primitives (records, addresses, verification)
//! - `signpost::store` - The synchronized in-memory map

pub mod error;
pub mod publisher;

// Re-export component crates
pub use signpost_core as core;
pub use signpost_store as store;

// Re-export main types for convenience
pub use error::{PublishError, Result};
pub use publisher::Publisher;

// Re-export commonly used component types
pub use signpost_core::{
    Address, Keypair, PublicKey, RecordBuilder, Signature, SignedRecord, MAX_DATA_SIZE,
};
pub use signpost_store::{PublishStore, SetOutcome, MAX_ADDRESSES, MAX_HISTORY_SIZE};
