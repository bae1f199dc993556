//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. There are no subcommands:
//! every invocation prepares the environment and launches the program.

use clap::Parser;
use std::path::PathBuf;

/// venvboot - Keep a Python virtual environment in sync and run your program in it.
#[derive(Debug, Parser)]
#[command(name = "venvboot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default .venvboot.yml)
    #[arg(short, long, env = "VENVBOOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Show pip output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print nothing but errors and the program's own output
    #[arg(short, long, conflicts_with_all = ["verbose", "quiet"])]
    pub silent: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
