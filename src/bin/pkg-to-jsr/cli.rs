//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

use pkg_to_jsr::util::shell::ColorChoice;

/// Generate jsr.json from package.json
#[derive(Parser)]
#[command(name = "pkg-to-jsr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory including package.json (defaults to the current directory)
    #[arg(long, env = "PKG_TO_JSR_ROOT")]
    pub root: Option<PathBuf>,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub silent: bool,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "silent")]
    pub verbose: bool,

    /// Coloring: auto, always, never
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}
