use std::path::PathBuf;

use clap::Parser;

/// Orbit: an interactive sphere of image tiles.
#[derive(Parser, Debug)]
#[command(name = "orbit", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `debug`, `orbit_renderer=trace`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
