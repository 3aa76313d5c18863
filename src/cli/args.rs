//! Command line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Series Renamer - Propose filenames and library folders for anime episodes
#[derive(Parser, Debug)]
#[command(name = "series-renamer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: <config dir>/series_renamer/config.toml)
    #[arg(short, long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Propose a filename and destination for one file
    Rename {
        /// Path to a rename request JSON file
        #[arg(value_name = "REQUEST")]
        request: PathBuf,

        /// Print the proposal as JSON
        #[arg(long)]
        json: bool,

        /// Read stream languages with ffprobe when the request has none
        #[arg(long)]
        probe: bool,
    },

    /// Propose names for many files
    Batch {
        /// Manifest (JSON array of requests) or a directory of request files
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Output path for the batch report
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Read stream languages with ffprobe when a request has none
        #[arg(long)]
        probe: bool,
    },

    /// Show the effective configuration
    Config,
}
