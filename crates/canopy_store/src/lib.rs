//! Flyweight record store, client entities, and collections for Canopy.
//!
//! This crate provides:
//! - [`RecordStore`] - Concurrent lookup-or-create cache of shared records
//! - [`ClientEntity`] - Extrinsic position paired with a shared record
//! - [`Collection`] - Owned list of entities backed by a shared store
//! - [`StoreConfig`] - Store construction options

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod collection;
mod config;
mod entity;
mod store;

pub use collection::{Collection, CollectionBuilder, CollectionStats};
pub use config::StoreConfig;
pub use entity::ClientEntity;
pub use store::RecordStore;
