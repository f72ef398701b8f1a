//! Settings file support.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::Args;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Fill missing difficulties from titles and file names after grouping
    pub backfill_difficulty: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            backfill_difficulty: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scan: ScanSettings,
    pub output: OutputSettings,
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Failed to parse settings {:?}", path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Command-line flags win over the file
    pub fn apply_args(&mut self, args: &Args) {
        if args.json {
            self.output.format = OutputFormat::Json;
        }
        if args.no_color {
            self.output.color = false;
        }
        if args.no_backfill {
            self.scan.backfill_difficulty = false;
        }
    }
}
