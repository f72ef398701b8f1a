use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::extensions;

/// On-disk chart dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartFormat {
    /// Line-oriented text chart (`.bms`, `.bme`, `.bml`)
    Text,
    /// Line-oriented text chart for the 9-key layout (`.pms`)
    TextNineKey,
    /// Whole-file JSON chart (`.bmson`)
    Json,
}

impl ChartFormat {
    /// Classify a path by its extension (ASCII case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if extensions::TEXT.iter().any(|e| ext.eq_ignore_ascii_case(e)) {
            Some(Self::Text)
        } else if ext.eq_ignore_ascii_case(extensions::TEXT_NINE_KEY) {
            Some(Self::TextNineKey)
        } else if ext.eq_ignore_ascii_case(extensions::JSON) {
            Some(Self::Json)
        } else {
            None
        }
    }

    pub fn is_text(&self) -> bool {
        !self.is_json()
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Whether the path names a chart file of any supported dialect
pub fn is_chart_path(path: &Path) -> bool {
    ChartFormat::from_path(path).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_extensions() {
        for name in ["a.bms", "a.bme", "a.bml", "a.BMS", "a.Bme"] {
            assert_eq!(
                ChartFormat::from_path(Path::new(name)),
                Some(ChartFormat::Text),
                "{name}"
            );
        }
    }

    #[test]
    fn test_nine_key_and_json_extensions() {
        assert_eq!(
            ChartFormat::from_path(Path::new("x/song.pms")),
            Some(ChartFormat::TextNineKey)
        );
        assert_eq!(
            ChartFormat::from_path(Path::new("x/song.bmson")),
            Some(ChartFormat::Json)
        );
        assert!(ChartFormat::Json.is_json());
        assert!(ChartFormat::TextNineKey.is_text());
    }

    #[test]
    fn test_non_chart_paths() {
        assert!(!is_chart_path(Path::new("song.ogg")));
        assert!(!is_chart_path(Path::new("bms")));
        assert!(!is_chart_path(Path::new("readme.txt")));
        assert!(!is_chart_path(Path::new(".bms/")));
    }
}
