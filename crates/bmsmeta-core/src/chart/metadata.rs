use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::{Difficulty, Keymode};
use crate::infer::{difficulty_from_path, difficulty_from_title};

/// Kind of an indexed resource definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// `#WAVxx` - keyed audio sample
    Audio,
    /// `#BMPxx` - keyed image
    Image,
}

/// Index -> file name tables of a text chart
///
/// Indices are stored upper-cased so `#WAVaa` and `#WAVAA` address the same slot;
/// the last definition wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTable {
    pub audio: BTreeMap<String, String>,
    pub image: BTreeMap<String, String>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: ResourceKind, index: &str, name: &str) {
        self.table_mut(kind)
            .insert(index.to_ascii_uppercase(), name.to_string());
    }

    pub fn get(&self, kind: ResourceKind, index: &str) -> Option<&str> {
        self.table(kind)
            .get(&index.to_ascii_uppercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.audio.len() + self.image.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audio.is_empty() && self.image.is_empty()
    }

    fn table(&self, kind: ResourceKind) -> &BTreeMap<String, String> {
        match kind {
            ResourceKind::Audio => &self.audio,
            ResourceKind::Image => &self.image,
        }
    }

    fn table_mut(&mut self, kind: ResourceKind) -> &mut BTreeMap<String, String> {
        match kind {
            ResourceKind::Audio => &mut self.audio,
            ResourceKind::Image => &mut self.image,
        }
    }
}

/// Metadata of one chart file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub path: PathBuf,
    pub title: String,
    pub subtitle: String,
    pub play_level: String,
    /// Empty until known; otherwise a canonical label or the raw `#DIFFICULTY` value
    pub difficulty: String,
    pub artist: String,
    pub genre: String,
    pub keymode: Keymode,
    /// Legacy digest, hex. Empty for JSON charts.
    pub md5: String,
    pub sha256: String,
    /// One per playable note-placement line, not per note object
    pub total_notes: u32,
    /// Resource definitions, text charts only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceTable>,
}

impl ChartMetadata {
    /// Empty record for a text chart (keymode defaults to 7)
    pub fn new_text<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            keymode: Keymode::Seven,
            resources: Some(ResourceTable::new()),
            ..Default::default()
        }
    }

    /// Empty record for a JSON chart
    pub fn new_json<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Difficulty as a canonical rank, if the label is one
    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::from_label(&self.difficulty)
    }

    pub fn has_difficulty(&self) -> bool {
        !self.difficulty.is_empty()
    }

    /// Overwrite the difficulty label; `None` clears it
    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.difficulty = difficulty
            .map(|d| d.label().to_string())
            .unwrap_or_default();
    }

    /// Fill an empty difficulty from the title, then from the file name.
    ///
    /// A label that is already set is left alone. Returns whether one was filled.
    pub fn backfill_difficulty(&mut self) -> bool {
        if self.has_difficulty() {
            return false;
        }
        let inferred = difficulty_from_title(&self.title, &self.subtitle)
            .or_else(|| difficulty_from_path(&self.path));
        if let Some(difficulty) = inferred {
            debug!("Backfilled difficulty {} for {:?}", difficulty, self.path);
            self.set_difficulty(Some(difficulty));
        }
        inferred.is_some()
    }

    /// File name without directory and extension
    pub fn pure_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn has_notes(&self) -> bool {
        self.total_notes > 0
    }
}
