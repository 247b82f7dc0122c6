//! Canopy - Flyweight record store
//!
//! This crate re-exports all layers of the Canopy system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: canopy_runtime    — Forest demo driver, CLI
//! Layer 1: canopy_store      — Record store, client entities, collections
//! Layer 0: canopy_foundation — Core types (SharedRecord, RecordKey, Error)
//! ```

pub use canopy_foundation as foundation;
pub use canopy_runtime as runtime;
pub use canopy_store as store;
