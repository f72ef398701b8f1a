use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::ChartMetadata;

/// Charts found in one folder, treated as variants of the same song
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartGroup {
    pub path: PathBuf,
    /// Title of the first retained chart, empty when there is none
    pub name: String,
    pub charts: Vec<ChartMetadata>,
}

impl ChartGroup {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Add a chart; charts without notes are dropped.
    ///
    /// Returns whether the chart was kept.
    pub fn push(&mut self, chart: ChartMetadata) -> bool {
        if !chart.has_notes() {
            debug!("Skipping chart without notes: {:?}", chart.path);
            return false;
        }
        if self.charts.is_empty() {
            self.name = chart.title.clone();
        }
        self.charts.push(chart);
        true
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Fill still-empty difficulty labels from the title, then from the file name.
    ///
    /// Labels that are already set are left alone.
    pub fn backfill_difficulties(&mut self) {
        for chart in &mut self.charts {
            chart.backfill_difficulty();
        }
    }
}
