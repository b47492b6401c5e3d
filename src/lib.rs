//! Offline-mode UUID derivation for Minecraft player names.
//!
//! Implements the `OfflinePlayer:<name>` construction servers apply when
//! `online-mode=false`, as a library function plus a one-argument binary.

pub mod cli;
pub mod offline;

pub use offline::offline_uuid;
