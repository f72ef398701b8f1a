//! CLI argument definitions for bmsmeta.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bmsmeta")]
#[command(about = "BMS / BMSON chart metadata extractor", version)]
pub struct Args {
    /// Settings file (TOML)
    #[arg(long, global = true, value_name = "FILE", env = "BMSMETA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print records as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored console output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Do not fill missing difficulties from titles and file names
    #[arg(long, global = true)]
    pub no_backfill: bool,

    /// Log progress at info level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a single chart file
    Parse {
        /// Chart file (.bms, .bme, .bml, .pms, .bmson)
        file: PathBuf,
    },
    /// Load all charts of one folder as a group
    Group {
        /// Song folder
        dir: PathBuf,
    },
    /// Find chart folders recursively
    Scan {
        /// Library root
        root: PathBuf,
    },
    /// Strip a trailing variant tag from a title
    Title {
        /// Title text
        text: String,
    },
}
