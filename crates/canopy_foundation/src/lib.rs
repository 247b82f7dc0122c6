//! Core record, key, and error types for Canopy.
//!
//! This crate provides:
//! - [`SharedRecord`] - Immutable intrinsic state shared by many entities
//! - [`RecordKey`] - Collision-free composite key for shared records
//! - [`RecordRef`] - Counted handle to a store-owned record
//! - [`Description`] - Combined extrinsic and intrinsic view of an entity
//! - [`Error`] - Error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod key;
mod record;

pub use error::{Error, ErrorKind};
pub use key::RecordKey;
pub use record::{Description, RecordRef, SharedRecord};

/// Result type for Canopy operations.
pub type Result<T> = std::result::Result<T, Error>;
