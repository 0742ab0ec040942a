//! Command-line interface
//!
//! The CLI is the presentation boundary: it validates input formats
//! (10-digit phone, 4-digit password), picks what to show from the
//! session state, and renders the habit list. The core never re-validates
//! formats.

pub mod commands;

use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub use commands::Commands;

#[derive(Parser, Debug)]
#[command(
    name = "hf",
    version,
    about = "HabitForge - weekly habit tracker",
    long_about = "Track weekly habits from the terminal. Log in with a phone \
                  number, add habits, toggle days complete, watch streaks."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub robot: bool,

    /// Data directory (defaults to $HF_ROOT or the platform data dir)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging
    #[arg(short, long, global = true)]
    pub quiet: bool,
}
