//! The publish store: authoritative address-to-record map.
//!
//! One exclusive lock guards the whole map. The coarse grain is
//! intentional: capacity checks must be atomic across the map, and the
//! critical section is a handful of in-memory operations. Verification
//! runs before the lock is taken, so signature math never serializes
//! concurrent callers.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use signpost_core::{verify_record, Address, SignedRecord};

use crate::error::Result;

/// Maximum number of past values retained per address.
pub const MAX_HISTORY_SIZE: usize = 10;

/// Maximum number of distinct addresses the store will hold.
pub const MAX_ADDRESSES: usize = 1000;

/// Result of a verified write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// First record for this address.
    Inserted,
    /// Replaced the current record; the value joined the history ring.
    Updated,
    /// Valid write for a new address, but the address table is full.
    /// The write was not persisted. Not an error: callers still get an
    /// acknowledgment, and must not equate an ack with persistence once
    /// the table is at capacity.
    DroppedCapacity,
}

/// Concurrency-safe in-memory map from address to current record + history.
///
/// The store is the sole owner of published state. External code reads and
/// writes only through [`get`](Self::get), [`history`](Self::history) and
/// [`set`](Self::set). State lives purely in memory and is lost on restart.
///
/// Records are never deleted and never expire; the only bound on growth is
/// the [`MAX_ADDRESSES`] cap on distinct addresses. That is a design
/// boundary, not an oversight.
pub struct PublishStore {
    inner: Mutex<StoreInner>,
}

struct StoreInner {
    records: HashMap<Address, Entry>,
}

struct Entry {
    record: SignedRecord,
    /// FIFO ring of published values, oldest first. Seeded with the first
    /// value written, so the newest value is always the last element.
    history: VecDeque<String>,
}

impl PublishStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                records: HashMap::new(),
            }),
        }
    }

    /// Get the current record for an address.
    ///
    /// Returns a clone of the stored record; the store never re-verifies
    /// on read.
    pub fn get(&self, address: &Address) -> Option<SignedRecord> {
        let inner = self.inner.lock().unwrap();
        inner.records.get(address).map(|e| e.record.clone())
    }

    /// Snapshot of the value history for an address, oldest first.
    ///
    /// The returned vector is a copy taken at call time; later writes never
    /// alias into it. Unknown addresses yield an empty vector.
    pub fn history(&self, address: &Address) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        inner
            .records
            .get(address)
            .map(|e| e.history.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Verify and upsert a record.
    ///
    /// Verification happens before the lock is acquired; a rejected record
    /// leaves the store untouched. Writes to the same address are
    /// linearized by the lock: when two valid writes race, the second lock
    /// holder ends up current and the other lands in history. Timestamps
    /// never influence ordering.
    pub fn set(&self, record: SignedRecord) -> Result<SetOutcome> {
        verify_record(&record)?;
        let address = Address::parse(&record.address)?;

        let mut inner = self.inner.lock().unwrap();

        if let Some(entry) = inner.records.get_mut(&address) {
            entry.history.push_back(record.value.clone());
            while entry.history.len() > MAX_HISTORY_SIZE {
                entry.history.pop_front();
            }
            entry.record = record;
            return Ok(SetOutcome::Updated);
        }

        if inner.records.len() >= MAX_ADDRESSES {
            tracing::warn!("address table full, dropping write for {}", address);
            return Ok(SetOutcome::DroppedCapacity);
        }

        tracing::debug!("new address {}", address);
        let mut history = VecDeque::with_capacity(MAX_HISTORY_SIZE);
        history.push_back(record.value.clone());
        inner.records.insert(address, Entry { record, history });
        Ok(SetOutcome::Inserted)
    }

    /// All known addresses, sorted.
    pub fn addresses(&self) -> Vec<Address> {
        let inner = self.inner.lock().unwrap();
        let mut addresses: Vec<Address> = inner.records.keys().cloned().collect();
        addresses.sort();
        addresses
    }

    /// Number of distinct addresses currently stored.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().records.is_empty()
    }
}

impl Default for PublishStore {
    fn default() -> Self {
        Self::new()
    }
}
