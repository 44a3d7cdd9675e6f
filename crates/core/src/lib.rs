//! Provider-agnostic half of the fleet tool: resource types, the
//! `CloudProvider` abstraction, and the logic behind every subcommand.
//! Concrete provider wiring lives in the adapter crates.

pub mod cloud_provider;
pub mod commands;
pub mod error;
pub mod filter;
pub mod format;
pub mod session;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
