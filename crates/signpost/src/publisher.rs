//! The Publisher: the narrow interface the transport layer calls.
//!
//! An HTTP router (out of scope here) decodes nothing itself: it hands raw
//! request bodies to [`Publisher::publish_json`] / [`publish_json_hex`]
//! and writes back whatever [`get_json`] / [`history_json`] return. The
//! publisher owns the store handle; there is no process-wide singleton.
//!
//! [`publish_json_hex`]: Publisher::publish_json_hex
//! [`get_json`]: Publisher::get_json
//! [`history_json`]: Publisher::history_json

use std::sync::Arc;

use signpost_core::{wire, Address, SignedRecord};
use signpost_store::{PublishStore, SetOutcome};

use crate::error::Result;

/// Cheaply cloneable handle over the publish store.
///
/// Every clone shares the same underlying map; a routing layer keeps one
/// clone per worker.
#[derive(Clone, Default)]
pub struct Publisher {
    store: Arc<PublishStore>,
}

impl Publisher {
    /// Create a publisher with a fresh, empty store.
    pub fn new() -> Self {
        Self {
            store: Arc::new(PublishStore::new()),
        }
    }

    /// Create a publisher over an existing store handle.
    pub fn with_store(store: Arc<PublishStore>) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &PublishStore {
        &self.store
    }

    // ─────────────────────────────────────────────────────────────────────
    // Writes
    // ─────────────────────────────────────────────────────────────────────

    /// Verify and store an already-decoded record.
    pub fn publish(&self, record: SignedRecord) -> Result<SetOutcome> {
        let address = record.address.clone();
        let outcome = self.store.set(record)?;
        tracing::debug!("publish {} -> {:?}", address, outcome);
        Ok(outcome)
    }

    /// Decode a JSON request body, then verify and store it.
    pub fn publish_json(&self, body: &[u8]) -> Result<SetOutcome> {
        let record = wire::from_json(body)?;
        self.publish(record)
    }

    /// Decode a hex-wrapped JSON payload (the URL-segment transport), then
    /// verify and store it.
    pub fn publish_json_hex(&self, payload: &str) -> Result<SetOutcome> {
        let record = wire::from_json_hex(payload)?;
        self.publish(record)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────

    /// Current record for an address, if any.
    pub fn get(&self, address: &Address) -> Option<SignedRecord> {
        self.store.get(address)
    }

    /// Current record serialized for the transport, if any.
    pub fn get_json(&self, address: &Address) -> Result<Option<Vec<u8>>> {
        match self.store.get(address) {
            Some(record) => Ok(Some(serde_json::to_vec(&record)?)),
            None => Ok(None),
        }
    }

    /// Value history for an address, oldest first. Empty when unknown.
    pub fn history(&self, address: &Address) -> Vec<String> {
        self.store.history(address)
    }

    /// Value history serialized for the transport.
    pub fn history_json(&self, address: &Address) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.store.history(address))?)
    }

    /// All known addresses, sorted.
    pub fn addresses(&self) -> Vec<Address> {
        self.store.addresses()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signpost_core::{Keypair, RecordBuilder};

    fn make_record(keypair: &Keypair, value: &str) -> SignedRecord {
        RecordBuilder::new("test")
            .timestamp("2026-08-06 12:00:00")
            .value(value)
            .sign(keypair)
    }

    #[test]
    fn test_publish_and_get() {
        let publisher = Publisher::new();
        let keypair = Keypair::generate();

        publisher.publish(make_record(&keypair, "v1")).unwrap();
        assert_eq!(publisher.get(&keypair.address()).unwrap().value, "v1");
    }

    #[test]
    fn test_clones_share_state() {
        let publisher = Publisher::new();
        let handle = publisher.clone();
        let keypair = Keypair::generate();

        handle.publish(make_record(&keypair, "shared")).unwrap();
        assert_eq!(publisher.get(&keypair.address()).unwrap().value, "shared");
    }

    #[test]
    fn test_get_json_none_for_unknown() {
        let publisher = Publisher::new();
        let address = Keypair::generate().address();
        assert!(publisher.get_json(&address).unwrap().is_none());
    }
}
