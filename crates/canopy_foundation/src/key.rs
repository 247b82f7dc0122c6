//! Composite keys for shared records.
//!
//! A [`RecordKey`] holds the full `(category, attribute_a, attribute_b)`
//! triple as three separate fields. Fields are never joined into a single
//! string, so `("A_B", "C", "")` and `("A", "B_C", "")` are different keys.
//! Equality and hashing are derived over all three fields in order.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Composite key identifying a shared record.
///
/// The strings are reference counted so a key can be cloned out of a
/// record (and stored in the record map) without copying field data.
#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecordKey {
    category: Arc<str>,
    attribute_a: Arc<str>,
    attribute_b: Arc<str>,
}

impl RecordKey {
    /// Creates a key from its three fields.
    ///
    /// Empty strings are valid, distinguishing values.
    #[must_use]
    pub fn new(
        category: impl Into<Arc<str>>,
        attribute_a: impl Into<Arc<str>>,
        attribute_b: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            category: category.into(),
            attribute_a: attribute_a.into(),
            attribute_b: attribute_b.into(),
        }
    }

    /// Returns the category field.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the first attribute field.
    #[must_use]
    pub fn attribute_a(&self) -> &str {
        &self.attribute_a
    }

    /// Returns the second attribute field.
    #[must_use]
    pub fn attribute_b(&self) -> &str {
        &self.attribute_b
    }

    /// Returns true if this key has the given fields.
    #[must_use]
    pub fn matches(&self, category: &str, attribute_a: &str, attribute_b: &str) -> bool {
        *self.category == *category
            && *self.attribute_a == *attribute_a
            && *self.attribute_b == *attribute_b
    }
}

impl fmt::Debug for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RecordKey({:?}, {:?}, {:?})",
            self.category, self.attribute_a, self.attribute_b
        )
    }
}
