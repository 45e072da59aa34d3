//! Command line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Application launcher for Hyprland.
///
/// Reads one event per line from stdin: /down /up /enter /esc /show
/// /reload /quit, anything else is the search text.
#[derive(Debug, Parser)]
#[command(name = "capy-launcher", version)]
pub struct Args {
    /// Read launcher settings from PATH instead of ~/.config/CapyShell/launcher.json
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the application index as JSON and exit
    #[arg(long)]
    pub list: bool,
}
