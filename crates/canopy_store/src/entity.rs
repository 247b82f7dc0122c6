//! Client entities: extrinsic position plus a shared record.

use std::io;
use std::sync::Arc;

use canopy_foundation::{Description, RecordRef};

/// A placed entity (a tree) referencing a store-owned shared record.
///
/// The position belongs to this entity and may be changed by its owner.
/// The record reference is fixed at construction.
#[derive(Clone, Debug)]
pub struct ClientEntity {
    x: i64,
    y: i64,
    record: RecordRef,
}

impl ClientEntity {
    /// Creates an entity at `(x, y)` sharing `record`.
    ///
    /// The record is not copied; the entity holds another handle to the
    /// same instance.
    #[must_use]
    pub fn new(x: i64, y: i64, record: RecordRef) -> Self {
        Self { x, y, record }
    }

    /// Returns the `(x, y)` position.
    #[must_use]
    pub const fn position(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    /// Moves the entity. The shared record is unaffected.
    pub fn set_position(&mut self, x: i64, y: i64) {
        self.x = x;
        self.y = y;
    }

    /// Returns the shared record this entity references.
    #[must_use]
    pub fn record(&self) -> &RecordRef {
        &self.record
    }

    /// Returns true if both entities reference the same record instance.
    #[must_use]
    pub fn shares_record_with(&self, other: &ClientEntity) -> bool {
        Arc::ptr_eq(&self.record, &other.record)
    }

    /// Describes this entity: its position and its record's fields.
    #[must_use]
    pub fn describe(&self) -> Description<'_> {
        self.record.describe_at(self.x, self.y)
    }

    /// Writes this entity's drawing line to `out`.
    ///
    /// # Errors
    ///
    /// Returns any error produced by the writer.
    pub fn draw<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.describe())
    }
}
