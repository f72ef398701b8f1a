use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use strum::FromRepr;

use crate::config::channels;

/// Controller layout a chart targets, named by lane count
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    FromRepr,
)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Keymode {
    Five = 5,
    #[default]
    Seven = 7,
    Nine = 9,
    Ten = 10,
    Fourteen = 14,
    TwentyFour = 24,
    FortyEight = 48,
}

impl Keymode {
    pub fn from_count(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn count(&self) -> u8 {
        *self as u8
    }
}

impl From<Keymode> for u8 {
    fn from(mode: Keymode) -> Self {
        mode.count()
    }
}

impl TryFrom<u8> for Keymode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_count(value).ok_or_else(|| format!("invalid keymode: {value}"))
    }
}

impl std::fmt::Display for Keymode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}K", self.count())
    }
}

/// Channel evidence collected while scanning a text chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeymodeEvidence {
    seven_key_extra: bool,
    ten_key_lower: bool,
    ten_key_upper: bool,
}

impl KeymodeEvidence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the channel of one note-placement line
    pub fn observe(&mut self, channel: u8) {
        if within(&channels::SEVEN_KEY_EXTRA, channel) {
            self.seven_key_extra = true;
        } else if within(&channels::TEN_KEY_LOWER, channel) {
            self.ten_key_lower = true;
        } else if within(&channels::TEN_KEY_UPPER, channel) {
            self.ten_key_upper = true;
        }
    }

    /// Resolve the layout once every line has been observed.
    ///
    /// The 9-key dialect wins over any channel evidence.
    pub fn resolve(&self, nine_key: bool) -> Keymode {
        if nine_key {
            Keymode::Nine
        } else if self.ten_key_lower || self.ten_key_upper {
            if self.seven_key_extra || self.ten_key_upper {
                Keymode::Fourteen
            } else {
                Keymode::Ten
            }
        } else if self.seven_key_extra {
            Keymode::Seven
        } else {
            Keymode::Five
        }
    }
}

fn within(ranges: &[RangeInclusive<u8>], channel: u8) -> bool {
    ranges.iter().any(|r| r.contains(&channel))
}
