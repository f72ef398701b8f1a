use std::path::Path;

use tracing::debug;

use crate::chart::{ChartFormat, ChartMetadata, KeymodeEvidence, ResourceKind};
use crate::config::{channels, headers, limits};
use crate::encoding::{decode_shift_jis, split_lines};
use crate::error::{Error, Result};
use crate::hash::{md5_hex, sha256_hex};
use crate::parser::read_chart_bytes;

/// Classification of one decoded line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Header(headers::Field, &'a str),
    Resource(ResourceKind, &'a str, &'a str),
    /// Note-placement record; `None` when the channel is not numeric
    Placement(Option<u8>),
    Other,
}

/// Parse a text chart from disk
pub fn parse_text_chart<P: AsRef<Path>>(path: P) -> Result<ChartMetadata> {
    let path = path.as_ref();
    let bytes = read_chart_bytes(path)?;
    parse_text_bytes(path, &bytes)
}

/// Parse the raw bytes of a text chart.
///
/// `path` is recorded on the result and its extension selects the 9-key dialect.
pub fn parse_text_bytes(path: &Path, bytes: &[u8]) -> Result<ChartMetadata> {
    let mut chart = ChartMetadata::new_text(path);
    let mut resources = chart.resources.take().unwrap_or_default();
    let mut evidence = KeymodeEvidence::new();

    for (index, raw) in split_lines(bytes).enumerate() {
        let line_no = index + 1;
        if raw.len() > limits::MAX_LINE_BYTES {
            return Err(Error::Read {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("line {line_no} is longer than {} bytes", limits::MAX_LINE_BYTES),
                ),
            });
        }

        let line = decode_shift_jis(raw).ok_or_else(|| Error::Decode {
            path: path.to_path_buf(),
            line: line_no,
        })?;

        match classify(&line) {
            Line::Header(field, value) => assign(&mut chart, field, value),
            Line::Resource(kind, index, name) => resources.insert(kind, index, name),
            Line::Placement(Some(channel)) => {
                evidence.observe(channel);
                // Counts lines, not note objects: a line carrying several
                // objects still adds one.
                if channels::PLAYABLE.iter().any(|r| r.contains(&channel)) {
                    chart.total_notes += 1;
                }
            }
            Line::Placement(None) | Line::Other => {}
        }
    }

    let nine_key = ChartFormat::from_path(path) == Some(ChartFormat::TextNineKey);
    chart.keymode = evidence.resolve(nine_key);
    chart.resources = Some(resources);
    chart.md5 = md5_hex(bytes);
    chart.sha256 = sha256_hex(bytes);

    debug!(
        "Parsed {:?}: {} ({}, {} notes)",
        path, chart.title, chart.keymode, chart.total_notes
    );
    Ok(chart)
}

fn assign(chart: &mut ChartMetadata, field: headers::Field, value: &str) {
    use headers::Field;

    let slot = match field {
        Field::Title => &mut chart.title,
        Field::Subtitle => &mut chart.subtitle,
        Field::PlayLevel => &mut chart.play_level,
        Field::Difficulty => &mut chart.difficulty,
        Field::Artist => &mut chart.artist,
        Field::Genre => &mut chart.genre,
    };
    *slot = value.to_string();
}

/// First matching classifier wins
fn classify(line: &str) -> Line<'_> {
    for (command, field) in headers::SCALAR {
        if let Some(rest) = strip_command(line, command) {
            return Line::Header(field, rest.trim());
        }
    }

    for (command, kind) in headers::INDEXED {
        if let Some((index, name)) = strip_command(line, command).and_then(split_indexed) {
            return Line::Resource(kind, index, name);
        }
    }

    match placement_channel(line) {
        Some(channel) => Line::Placement(channel),
        None => Line::Other,
    }
}

/// Strip a command prefix, comparing ASCII case-insensitively
fn strip_command<'a>(line: &'a str, command: &str) -> Option<&'a str> {
    let head = line.get(..command.len())?;
    head.eq_ignore_ascii_case(command)
        .then(|| &line[command.len()..])
}

/// `xx value` -> (`xx`, `value`), index being two ASCII alphanumerics
fn split_indexed(rest: &str) -> Option<(&str, &str)> {
    let bytes = rest.as_bytes();
    if bytes.len() < 4
        || !bytes[..2].iter().all(u8::is_ascii_alphanumeric)
        || !bytes[2].is_ascii_whitespace()
    {
        return None;
    }
    let value = rest[3..].trim();
    (!value.is_empty()).then(|| (&rest[..2], value))
}

/// Match `#MMMCC:data` and return the channel as a number.
///
/// Returns `None` for non-placement lines and `Some(None)` for placement
/// lines whose channel is not decimal.
fn placement_channel(line: &str) -> Option<Option<u8>> {
    let bytes = line.as_bytes();
    let is_placement = bytes.len() >= 8
        && bytes[0] == b'#'
        && bytes[1..4].iter().all(u8::is_ascii_digit)
        && bytes[4..6].iter().all(u8::is_ascii_alphanumeric)
        && bytes[6] == b':';
    is_placement.then(|| line[4..6].parse().ok())
}
