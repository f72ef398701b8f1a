//! Fixed configuration tables.
//!
//! Everything here is process-wide constant data:
//! - Read limits for chart files
//! - Recognized chart extensions
//! - Header command tables for the text format
//! - Channel ranges used for keymode detection
//! - Mode-hint priority list for the JSON format

/// Read limits applied while scanning text charts.
pub mod limits {
    /// Longest accepted line in bytes. Longer lines fail the parse with a read error.
    pub const MAX_LINE_BYTES: usize = 1_000_000;
}

/// Chart file extensions (lower-case, without the dot).
pub mod extensions {
    /// Text dialects with 5/7/10/14-key layouts.
    pub const TEXT: [&str; 3] = ["bms", "bme", "bml"];

    /// Text dialect for the 9-key single-player layout.
    pub const TEXT_NINE_KEY: &str = "pms";

    /// Whole-file JSON dialect.
    pub const JSON: &str = "bmson";
}

/// Header commands of the text format.
pub mod headers {
    use crate::chart::ResourceKind;

    /// Scalar header commands that assign a record field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Field {
        Title,
        Subtitle,
        PlayLevel,
        Difficulty,
        Artist,
        Genre,
    }

    /// Checked in order; the first matching prefix wins.
    pub const SCALAR: [(&str, Field); 6] = [
        ("#TITLE", Field::Title),
        ("#SUBTITLE", Field::Subtitle),
        ("#PLAYLEVEL", Field::PlayLevel),
        ("#DIFFICULTY", Field::Difficulty),
        ("#ARTIST", Field::Artist),
        ("#GENRE", Field::Genre),
    ];

    pub const INDEXED: [(&str, ResourceKind); 2] =
        [("#WAV", ResourceKind::Audio), ("#BMP", ResourceKind::Image)];
}

/// Channel ranges (inclusive) of note-placement records.
pub mod channels {
    use std::ops::RangeInclusive;

    /// Scratch and extra keys of the 7-key layout (player 1 and 2).
    pub const SEVEN_KEY_EXTRA: [RangeInclusive<u8>; 2] = [18..=19, 38..=39];

    /// Second-player lanes that indicate a double layout.
    pub const TEN_KEY_LOWER: [RangeInclusive<u8>; 2] = [21..=26, 41..=46];

    /// Second-player extra keys that indicate a 14-key layout.
    pub const TEN_KEY_UPPER: [RangeInclusive<u8>; 2] = [28..=29, 48..=49];

    /// Visible playable lanes; each matching line counts as one note.
    pub const PLAYABLE: [RangeInclusive<u8>; 2] = [11..=19, 21..=29];
}

/// Mode-hint substrings of the JSON format, in priority order.
///
/// `keyboard-24k-double` has to be tested before `24k` since it contains it.
pub const MODE_HINTS: [(&str, u8); 7] = [
    ("keyboard-24k-double", 48),
    ("24k", 24),
    ("14k", 14),
    ("10k", 10),
    ("9k", 9),
    ("7k", 7),
    ("5k", 5),
];
