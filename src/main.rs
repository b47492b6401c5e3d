use clap::Parser;
use tracing::debug;

use mc_offline_uuid::{cli::Cli, offline_uuid};

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries nothing but the UUID line,
    // which callers capture.
    let _ = tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_level(true)
            .finish(),
    );

    let uuid = offline_uuid(&cli.name);
    debug!("offline uuid for {}: {}", cli.name, uuid);

    println!("{uuid}");
}
