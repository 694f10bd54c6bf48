use std::path::PathBuf;

use clap::Parser;

/// Mosaic: pixel-exact tile layout for a fixed-size container.
///
/// Reads a scene as JSON (from `--scene` or stdin) or builds one from
/// `--tiles`, and prints one rectangle per tile.
#[derive(Parser, Debug)]
#[command(name = "mosaic", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Scene file; `-` reads stdin.
    #[arg(long, conflicts_with = "tiles")]
    pub scene: Option<PathBuf>,

    /// Container width, overriding the scene.
    #[arg(long)]
    pub width: Option<f64>,

    /// Container height, overriding the scene.
    #[arg(long)]
    pub height: Option<f64>,

    /// Lay out this many plain tiles instead of reading a scene.
    #[arg(long, requires_all = ["width", "height"])]
    pub tiles: Option<usize>,

    /// Indices of big tiles, comma separated.
    #[arg(long, value_delimiter = ',', requires = "tiles")]
    pub big: Vec<usize>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Log filter directive override (e.g. `mosaic=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
