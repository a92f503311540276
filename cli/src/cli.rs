//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rate the current grump factor from sunshine to thunderclouds.
#[derive(Parser)]
#[command(
    name = "grump-factor",
    version,
    about = "Sliding scale of grumpiness, in your terminal"
)]
pub struct Cli {
    /// Override the data directory settings are stored in
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current check-in
    Status {
        /// Print the state and derived content as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update level, cups, or name
    Set {
        /// Grump factor, 0-100
        #[arg(long)]
        level: Option<i32>,
        /// Cups of coffee, 0-4
        #[arg(long)]
        cups: Option<u32>,
        /// Who we are checking on
        #[arg(long)]
        name: Option<String>,
    },
    /// Nudge the level up one step
    Up,
    /// Nudge the level down one step
    Down,
    /// Jump to a quick-set preset (1 = happy ... 5 = extremely grumpy)
    Quick { slot: u8 },
    /// Toggle dark mode
    Dark,
    /// Reset level and cups to their defaults
    Reset,
    /// Reset saved settings entirely
    Clear,
    /// Print the shareable link and hand it to the share ports
    Share,
    /// Print all three message templates
    Messages,
    /// Print the sms: URL for the auto-selected template
    Sms,
    /// Adopt level/cups/name from a share link
    Import { url: String },
}
