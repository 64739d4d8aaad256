//! # Signpost Store
//!
//! The synchronized in-memory map holding the latest signed record and a
//! bounded value history per address.
//!
//! ## Overview
//!
//! [`PublishStore`] is the system's sole persistent state (in-memory only;
//! everything is lost on restart, by design). A single exclusive lock
//! guards the whole map so capacity checks are atomic, and signature
//! verification always runs before the lock is taken.
//!
//! ## Key Types
//!
//! - [`PublishStore`] - The address-to-record map
//! - [`SetOutcome`] - What happened to a verified write
//! - [`StoreError`] - Rejection of an unverifiable write
//!
//! ## Usage
//!
//! ```
//! use signpost_core::{Keypair, RecordBuilder};
//! use signpost_store::{PublishStore, SetOutcome};
//!
//! let store = PublishStore::new();
//! let keypair = Keypair::generate();
//!
//! let record = RecordBuilder::new("demo")
//!     .timestamp("2026-08-06 12:00:00")
//!     .value("hello")
//!     .sign(&keypair);
//!
//! assert_eq!(store.set(record).unwrap(), SetOutcome::Inserted);
//! assert_eq!(store.get(&keypair.address()).unwrap().value, "hello");
//! ```

pub mod error;
pub mod store;

pub use error::{Result, StoreError};
pub use store::{PublishStore, SetOutcome, MAX_ADDRESSES, MAX_HISTORY_SIZE};
