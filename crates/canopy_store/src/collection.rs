//! Collections of client entities (a forest of trees).
//!
//! A [`Collection`] owns its entities and holds a handle to a shared
//! [`RecordStore`]. Adding a member is the only path by which records are
//! requested from the store.

use std::fmt;
use std::io;
use std::sync::Arc;

use canopy_foundation::{Error, Result};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::entity::ClientEntity;
use crate::store::RecordStore;

/// An owned list of client entities backed by a shared record store.
///
/// A collection has a single owner and is not synchronized; only the store
/// behind it is shared between threads.
#[derive(Debug)]
pub struct Collection {
    store: Arc<RecordStore>,
    entities: Vec<ClientEntity>,
}

impl Collection {
    /// Creates an empty collection backed by `store`.
    #[must_use]
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            entities: Vec::new(),
        }
    }

    /// Returns a builder for configuring a collection.
    #[must_use]
    pub fn builder() -> CollectionBuilder {
        CollectionBuilder::default()
    }

    /// Adds an entity at `(x, y)` using the shared record for the given fields.
    ///
    /// Returns the newly added entity.
    pub fn add(
        &mut self,
        x: i64,
        y: i64,
        category: &str,
        attribute_a: &str,
        attribute_b: &str,
    ) -> &ClientEntity {
        let record = self.store.get_or_create(category, attribute_a, attribute_b);
        let index = self.entities.len();
        self.entities.push(ClientEntity::new(x, y, record));
        &self.entities[index]
    }

    /// Returns the number of entities in this collection.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the collection has no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns the number of distinct records in the backing store.
    ///
    /// When the store is shared, this includes records created through
    /// other collections.
    #[must_use]
    pub fn distinct_record_count(&self) -> usize {
        self.store.size()
    }

    /// Returns the backing store.
    #[must_use]
    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    /// Iterates over entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ClientEntity> + '_ {
        self.entities.iter()
    }

    /// Draws every entity, one line each, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the writer.
    pub fn draw<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for entity in &self.entities {
            entity.draw(out)?;
        }
        Ok(())
    }

    /// Returns entity and record counts.
    #[must_use]
    pub fn stats(&self) -> CollectionStats {
        CollectionStats {
            entities: self.count(),
            distinct_records: self.distinct_record_count(),
        }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a ClientEntity;
    type IntoIter = std::slice::Iter<'a, ClientEntity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

/// Builder for [`Collection`].
///
/// The store is required; [`CollectionBuilder::build`] fails without one.
#[derive(Debug, Default)]
pub struct CollectionBuilder {
    store: Option<Arc<RecordStore>>,
    capacity: usize,
}

impl CollectionBuilder {
    /// Sets the backing store.
    #[must_use]
    pub fn store(mut self, store: Arc<RecordStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Reserves space for `capacity` entities.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MissingDependency`](canopy_foundation::ErrorKind::MissingDependency)
    /// if no store was supplied.
    pub fn build(self) -> Result<Collection> {
        let store = self
            .store
            .ok_or_else(|| Error::missing_dependency("Collection", "RecordStore"))?;
        Ok(Collection {
            store,
            entities: Vec::with_capacity(self.capacity),
        })
    }
}

/// Entity and record counts for a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CollectionStats {
    /// Number of entities in the collection.
    pub entities: usize,
    /// Number of distinct shared records in the backing store.
    pub distinct_records: usize,
}

impl CollectionStats {
    /// Returns how many records were avoided by sharing.
    #[must_use]
    pub fn shared_savings(&self) -> usize {
        self.entities.saturating_sub(self.distinct_records)
    }
}

impl fmt::Display for CollectionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total trees planted: {}", self.entities)?;
        writeln!(f, "Total unique tree types: {}", self.distinct_records)?;
        write!(
            f,
            "Memory savings: instead of {} distinct types, only {} shared flyweights were created.",
            self.entities, self.distinct_records
        )
    }
}
