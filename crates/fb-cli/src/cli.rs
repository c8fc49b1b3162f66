//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Fair billing report.
///
/// Reads a log of `HH:MM:SS USERNAME Start|End` lines and prints, per user,
/// the number of billed sessions and their total duration in seconds.
#[derive(Debug, Parser)]
#[command(name = "fb", version, about, long_about = None)]
pub struct Cli {
    /// Path to the session log.
    pub log_file: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}
