use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Canonical difficulty rank, stored on records as the labels "1".."5"
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Difficulty {
    #[strum(serialize = "1")]
    Beginner = 1,
    #[strum(serialize = "2")]
    Normal = 2,
    #[strum(serialize = "3")]
    Hyper = 3,
    #[strum(serialize = "4")]
    Another = 4,
    #[strum(serialize = "5")]
    Insane = 5,
}

impl Difficulty {
    /// Parse a canonical label ("1".."5")
    pub fn from_label(label: &str) -> Option<Self> {
        label.trim().parse().ok()
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Lower-case keyword used in titles and file names
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Normal => "normal",
            Self::Hyper => "hyper",
            Self::Another => "another",
            Self::Insane => "insane",
        }
    }

    /// One-letter abbreviation used in file names
    pub fn letter(&self) -> char {
        match self {
            Self::Beginner => 'b',
            Self::Normal => 'n',
            Self::Hyper => 'h',
            Self::Another => 'a',
            Self::Insane => 'i',
        }
    }

    /// Get the display name (e.g., "NORMAL", "HYPER")
    pub fn expand_name(&self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Normal => "NORMAL",
            Self::Hyper => "HYPER",
            Self::Another => "ANOTHER",
            Self::Insane => "INSANE",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
