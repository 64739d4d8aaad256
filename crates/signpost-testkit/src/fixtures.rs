//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use signpost::Publisher;
use signpost_core::{Address, Keypair, PublicKey, RecordBuilder, SignedRecord};
use signpost_store::PublishStore;

/// A test fixture with a signing keypair and a store.
pub struct TestFixture {
    pub keypair: Keypair,
    pub store: Arc<PublishStore>,
}

impl TestFixture {
    /// Create a new test fixture with a random keypair.
    pub fn new() -> Self {
        Self {
            keypair: Keypair::generate(),
            store: Arc::new(PublishStore::new()),
        }
    }

    /// Create with a deterministic keypair from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            keypair: Keypair::from_seed(&seed),
            store: Arc::new(PublishStore::new()),
        }
    }

    /// Get the keypair's public key.
    pub fn public_key(&self) -> PublicKey {
        self.keypair.public_key()
    }

    /// Get the keypair's address.
    pub fn address(&self) -> Address {
        self.keypair.address()
    }

    /// A publisher facade over this fixture's store.
    pub fn publisher(&self) -> Publisher {
        Publisher::with_store(Arc::clone(&self.store))
    }

    /// Create a correctly signed record with a fixed timestamp.
    pub fn make_record(&self, value: &str) -> SignedRecord {
        self.make_record_at("2026-08-06 12:00:00", value)
    }

    /// Create a correctly signed record with the given timestamp string.
    pub fn make_record_at(&self, timestamp: &str, value: &str) -> SignedRecord {
        RecordBuilder::new("fixture")
            .timestamp(timestamp)
            .value(value)
            .sign(&self.keypair)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple test fixtures for multi-writer tests.
///
/// Each fixture gets a distinct deterministic keypair; they all share
/// nothing.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[..8].copy_from_slice(&(i as u64).to_le_bytes());
            TestFixture::with_seed(seed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use signpost_core::verify_record;
    use signpost_store::SetOutcome;

    #[test]
    fn test_fixture_records_verify() {
        let fixture = TestFixture::new();
        let record = fixture.make_record("hello");

        assert!(verify_record(&record).is_ok());
        assert_eq!(record.address, fixture.address().as_str());
    }

    #[test]
    fn test_fixture_publisher_shares_store() {
        let fixture = TestFixture::new();
        let publisher = fixture.publisher();

        publisher.publish(fixture.make_record("v1")).unwrap();
        assert_eq!(fixture.store.get(&fixture.address()).unwrap().value, "v1");
    }

    #[test]
    fn test_multi_party_fixtures_are_distinct() {
        let parties = multi_party_fixtures(3);

        let pks: Vec<_> = parties.iter().map(|p| p.public_key()).collect();
        assert_ne!(pks[0], pks[1]);
        assert_ne!(pks[1], pks[2]);
        assert_ne!(pks[0], pks[2]);
    }

    #[test]
    fn test_cross_party_records_do_not_collide() {
        let parties = multi_party_fixtures(2);
        let store = PublishStore::new();

        assert_eq!(
            store.set(parties[0].make_record("a")).unwrap(),
            SetOutcome::Inserted
        );
        assert_eq!(
            store.set(parties[1].make_record("b")).unwrap(),
            SetOutcome::Inserted
        );
        assert_eq!(store.len(), 2);
    }
}
