//! Forest demo driver and CLI support for Canopy.
//!
//! This crate provides:
//! - [`Demo`] - Plants a seeded forest against a shared record store
//! - [`DemoConfig`] - Demo options
//! - [`CliCommand`] - Command-line parsing into a demo run, help, or version
//! - [`SPECIES`] - The fixed species catalogue the demo plants from

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod demo;
mod species;

pub use config::{CliCommand, DemoConfig};
pub use demo::Demo;
pub use species::{SPECIES, Species};
