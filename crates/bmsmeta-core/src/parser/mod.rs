//! Chart parsers.
//!
//! - `bms` - line-oriented text charts (`.bms`, `.bme`, `.bml`, `.pms`)
//! - `bmson` - whole-file JSON charts (`.bmson`)
//!
//! Each parser has a path entry point that reads the file and a byte entry
//! point that does the parsing; the file handle never outlives the read.

mod bms;
mod bmson;

pub use bms::*;
pub use bmson::*;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::chart::{ChartFormat, ChartMetadata};
use crate::error::{Error, Result};

/// Parse a chart of either dialect, dispatching on the extension
pub fn parse_chart<P: AsRef<Path>>(path: P) -> Result<ChartMetadata> {
    let path = path.as_ref();
    match ChartFormat::from_path(path) {
        Some(ChartFormat::Json) => parse_json_chart(path),
        Some(_) => parse_text_chart(path),
        None => Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Read the whole file, keeping open and read failures apart
pub(crate) fn read_chart_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytes)
}
