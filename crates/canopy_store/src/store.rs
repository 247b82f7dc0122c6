//! Shared record store.
//!
//! The [`RecordStore`] guarantees at most one [`SharedRecord`] per distinct
//! [`RecordKey`] over its lifetime. Every lookup for a key after the first
//! returns a clone of the same [`RecordRef`], so holders can compare records
//! by identity with [`Arc::ptr_eq`].
//!
//! # Concurrency
//!
//! The map sits behind a single [`RwLock`]. Hits only take the read lock.
//! A miss takes the write lock and inserts through the map's entry API, which
//! re-checks the key under the exclusive lock, so two racing callers for the
//! same key both receive the record created by whichever got the lock first.
//! Records are never removed or replaced.

use std::collections::HashMap;
use std::sync::Arc;

use canopy_foundation::{RecordKey, RecordRef, SharedRecord};
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::config::StoreConfig;

/// Concurrent lookup-or-create cache of shared records.
///
/// Construct one store and share it (as `Arc<RecordStore>`) with every
/// caller that must observe the deduplication guarantee. Separate stores
/// are fully independent.
#[derive(Debug)]
pub struct RecordStore {
    records: RwLock<HashMap<RecordKey, RecordRef>>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Creates an empty store with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    /// Creates an empty store with the given configuration.
    #[must_use]
    pub fn with_config(config: &StoreConfig) -> Self {
        Self {
            records: RwLock::new(HashMap::with_capacity(config.initial_capacity)),
        }
    }

    /// Creates an empty store ready to be shared between owners.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Returns the record for the given fields, creating it on first use.
    ///
    /// Repeated calls with equal fields return the same instance, from any
    /// thread and in any order.
    pub fn get_or_create(&self, category: &str, attribute_a: &str, attribute_b: &str) -> RecordRef {
        self.get_or_create_key(RecordKey::new(category, attribute_a, attribute_b))
    }

    /// Returns the record for `key`, creating it on first use.
    pub fn get_or_create_key(&self, key: RecordKey) -> RecordRef {
        let hit = self.records.read().get(&key).cloned();
        if let Some(record) = hit {
            trace!(?key, "shared record hit");
            return record;
        }

        let mut records = self.records.write();
        let before = records.len();
        let expected = key.clone();
        let mut created = false;
        let record = Arc::clone(records.entry(key).or_insert_with_key(|key| {
            created = true;
            Arc::new(SharedRecord::from_key(key.clone()))
        }));

        debug_assert!(record.key() == &expected, "record stored under a foreign key");
        debug_assert!(
            !created || records.len() == before + 1,
            "creating a record must add exactly one entry"
        );

        if created {
            debug!(
                category = record.category(),
                attribute_a = record.attribute_a(),
                attribute_b = record.attribute_b(),
                total = records.len(),
                "created shared record"
            );
        } else {
            trace!(key = ?record.key(), "shared record created by another caller");
        }

        record
    }

    /// Returns the record for the given fields if it has been created.
    #[must_use]
    pub fn get(&self, category: &str, attribute_a: &str, attribute_b: &str) -> Option<RecordRef> {
        self.get_key(&RecordKey::new(category, attribute_a, attribute_b))
    }

    /// Returns the record for `key` if it has been created.
    #[must_use]
    pub fn get_key(&self, key: &RecordKey) -> Option<RecordRef> {
        self.records.read().get(key).cloned()
    }

    /// Returns true if a record exists for the given fields.
    #[must_use]
    pub fn contains(&self, category: &str, attribute_a: &str, attribute_b: &str) -> bool {
        self.records
            .read()
            .contains_key(&RecordKey::new(category, attribute_a, attribute_b))
    }

    /// Returns the number of distinct records created so far.
    #[must_use]
    pub fn size(&self) -> usize {
        self.records.read().len()
    }

    /// Returns true if no record has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Returns a snapshot of every record, in no particular order.
    #[must_use]
    pub fn records(&self) -> Vec<RecordRef> {
        self.records.read().values().cloned().collect()
    }
}
