//! CLI argument definitions.

use clap::Parser;

/// Top-level CLI parser for `mc-offline-uuid`.
#[derive(Debug, Parser)]
#[command(
    name = "mc-offline-uuid",
    version,
    about = "Derive the offline-mode UUID for a player name"
)]
pub struct Cli {
    /// Player name to derive the UUID from, hashed exactly as given.
    pub name: String,
}
