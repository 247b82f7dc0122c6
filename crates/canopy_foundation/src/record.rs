//! Shared (intrinsic) records and entity descriptions.
//!
//! A [`SharedRecord`] is created once per distinct [`RecordKey`] by the
//! record store and handed out as a [`RecordRef`]. Records are immutable:
//! there is no setter, and every holder of a `RecordRef` sees the same
//! instance.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::key::RecordKey;

/// Counted handle to a store-owned shared record.
///
/// Two handles refer to the same cached record iff [`Arc::ptr_eq`] holds.
pub type RecordRef = Arc<SharedRecord>;

/// Immutable intrinsic state shared by many client entities.
///
/// Value equality compares all three fields. Identity (the thing the record
/// store guarantees) is pointer equality of the [`RecordRef`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SharedRecord {
    key: RecordKey,
}

impl SharedRecord {
    /// Creates a record from its three fields.
    #[must_use]
    pub fn new(
        category: impl Into<Arc<str>>,
        attribute_a: impl Into<Arc<str>>,
        attribute_b: impl Into<Arc<str>>,
    ) -> Self {
        Self::from_key(RecordKey::new(category, attribute_a, attribute_b))
    }

    /// Creates a record whose fields are those of `key`.
    #[must_use]
    pub fn from_key(key: RecordKey) -> Self {
        Self { key }
    }

    /// Returns the composite key this record is cached under.
    #[must_use]
    pub fn key(&self) -> &RecordKey {
        &self.key
    }

    /// Returns the category (e.g. the tree species).
    #[must_use]
    pub fn category(&self) -> &str {
        self.key.category()
    }

    /// Returns the first attribute (e.g. the leaf color).
    #[must_use]
    pub fn attribute_a(&self) -> &str {
        self.key.attribute_a()
    }

    /// Returns the second attribute (e.g. the texture name).
    #[must_use]
    pub fn attribute_b(&self) -> &str {
        self.key.attribute_b()
    }

    /// Describes this record placed at `(x, y)`.
    #[must_use]
    pub fn describe_at(&self, x: i64, y: i64) -> Description<'_> {
        Description {
            x,
            y,
            category: self.category(),
            attribute_a: self.attribute_a(),
            attribute_b: self.attribute_b(),
        }
    }
}

/// Read-only view combining an entity's position with its record's fields.
///
/// The `Display` form is the single line emitted when an entity is drawn.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Description<'a> {
    /// Horizontal position.
    pub x: i64,
    /// Vertical position.
    pub y: i64,
    /// Record category.
    pub category: &'a str,
    /// Record first attribute.
    pub attribute_a: &'a str,
    /// Record second attribute.
    pub attribute_b: &'a str,
}

impl fmt::Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Drawing a {} tree at ({}, {}) with color=[{}] and texture=[{}]",
            self.category, self.x, self.y, self.attribute_a, self.attribute_b
        )
    }
}
