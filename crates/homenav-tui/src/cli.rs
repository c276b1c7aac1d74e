//! CLI argument parsing for homenav-tui.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "homenav-tui")]
#[command(about = "Homenav TUI - switch between configured apps and the home menu", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging (logs to /tmp/homenav-tui.log)
    #[arg(short, long)]
    pub debug: bool,

    /// Config file (defaults to ~/.config/homenav/config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Session id scoping the last-app record (defaults to $HOMENAV_SESSION or the pid)
    #[arg(short, long)]
    pub session: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive TUI mode (default)
    Tui,

    /// List configured apps in directory order
    Apps,

    /// One-shot home menu search (for testing)
    Query {
        /// Search query
        query: String,
    },

    /// Show the last app recorded for the session
    Last,
}
