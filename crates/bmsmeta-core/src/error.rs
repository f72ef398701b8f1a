use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to open chart {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read chart {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Shift-JIS decode error in {path:?} at line {line}")]
    Decode { path: PathBuf, line: usize },

    #[error("Malformed JSON chart {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Not a chart file: {path:?}")]
    UnsupportedFormat { path: PathBuf },
}

impl Error {
    /// Path of the chart file the error belongs to
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Open { path, .. }
            | Self::Read { path, .. }
            | Self::Decode { path, .. }
            | Self::Json { path, .. }
            | Self::UnsupportedFormat { path } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
