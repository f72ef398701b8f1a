use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::chart::{ChartMetadata, Keymode};
use crate::config::MODE_HINTS;
use crate::error::{Error, Result};
use crate::hash::sha256_hex;
use crate::parser::read_chart_bytes;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Bmson {
    info: BmsonInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BmsonInfo {
    #[serde(deserialize_with = "nullable")]
    title: String,
    #[serde(deserialize_with = "nullable")]
    subtitle: String,
    #[serde(deserialize_with = "nullable")]
    artist: String,
    #[serde(deserialize_with = "nullable")]
    genre: String,
    #[serde(deserialize_with = "nullable")]
    mode_hint: String,
    #[serde(deserialize_with = "nullable")]
    chart_name: String,
    level: i64,
}

/// Treat `null` like a missing string
fn nullable<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The document and its `info` block have to be JSON objects.
///
/// Derived struct deserializers also accept sequences, which would turn `[]`
/// into a chart.
fn check_objects(document: &Value) -> std::result::Result<(), serde_json::Error> {
    let Some(root) = document.as_object() else {
        return Err(serde::de::Error::custom("chart document is not a JSON object"));
    };
    match root.get("info") {
        Some(info) if !info.is_object() => {
            Err(serde::de::Error::custom("chart info is not a JSON object"))
        }
        _ => Ok(()),
    }
}

/// Parse a JSON chart from disk
pub fn parse_json_chart<P: AsRef<Path>>(path: P) -> Result<ChartMetadata> {
    let path = path.as_ref();
    let bytes = read_chart_bytes(path)?;
    parse_json_bytes(path, &bytes)
}

/// Parse the raw bytes of a JSON chart.
///
/// Difficulty is left empty for the inference pass. `total_notes` is fixed at 1
/// to mark the chart as having content; notes are not counted.
pub fn parse_json_bytes(path: &Path, bytes: &[u8]) -> Result<ChartMetadata> {
    let json_error = |source: serde_json::Error| Error::Json {
        path: path.to_path_buf(),
        source,
    };
    let document: Value = serde_json::from_slice(bytes).map_err(json_error)?;
    check_objects(&document).map_err(json_error)?;
    let bmson: Bmson = serde_json::from_value(document).map_err(json_error)?;
    let info = bmson.info;

    let mut chart = ChartMetadata::new_json(path);
    chart.title = format!("{}{}", info.title, info.subtitle);
    chart.subtitle = info.chart_name;
    chart.play_level = info.level.to_string();
    chart.artist = info.artist;
    chart.genre = info.genre;
    if let Some(keymode) = keymode_from_hint(&info.mode_hint) {
        chart.keymode = keymode;
    }
    chart.sha256 = sha256_hex(bytes);
    chart.total_notes = 1;

    debug!("Parsed {:?}: {} ({})", path, chart.title, chart.keymode);
    Ok(chart)
}

/// First hint in priority order that occurs in `mode_hint`
pub fn keymode_from_hint(mode_hint: &str) -> Option<Keymode> {
    MODE_HINTS
        .iter()
        .find(|(hint, _)| mode_hint.contains(hint))
        .and_then(|&(_, count)| Keymode::from_count(count))
}
