use std::path::Path;
use std::sync::LazyLock;

use strum::IntoEnumIterator;

use crate::chart::Difficulty;

/// Play-style and keymode qualifiers that may precede a difficulty token
const QUALIFIERS: [&str; 11] = ["", "sp", "dp", "5", "7", "9", "14", "5k", "7k", "9k", "14k"];

/// Separators accepted before a trailing token in loose mode
const SEPARATORS: [char; 3] = [' ', '-', '_'];

/// How strictly a bare name has to match a difficulty token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Exact token, a separated trailing token, or a trailing `[token]` / `(token)`
    Loose,
    /// Exact token only
    Strict,
}

/// Every qualifier combined with the five letters, then the five keywords.
///
/// Order matters: the first matching token decides the difficulty.
static TOKENS: LazyLock<Vec<(String, Difficulty)>> = LazyLock::new(|| {
    let mut tokens = Vec::with_capacity(QUALIFIERS.len() * 10);
    for qualifier in QUALIFIERS {
        tokens.extend(Difficulty::iter().map(|d| (format!("{qualifier}{}", d.letter()), d)));
        tokens.extend(Difficulty::iter().map(|d| (format!("{qualifier}{}", d.keyword()), d)));
    }
    tokens
});

/// Infer a difficulty from a bare name such as `7h`, `song_another` or `song [n]`.
///
/// Matching is case-insensitive.
pub fn difficulty_from_name(name: &str, mode: MatchMode) -> Option<Difficulty> {
    if name.is_empty() {
        return None;
    }
    let name = name.to_lowercase();

    TOKENS
        .iter()
        .find(|(token, _)| matches_token(&name, token, mode))
        .map(|(_, difficulty)| *difficulty)
}

/// Loose match against the file name without directory and extension
pub fn difficulty_from_path<P: AsRef<Path>>(path: P) -> Option<Difficulty> {
    let stem = path.as_ref().file_stem()?.to_string_lossy();
    difficulty_from_name(&stem, MatchMode::Loose)
}

fn matches_token(name: &str, token: &str, mode: MatchMode) -> bool {
    if name == token {
        return true;
    }
    if mode == MatchMode::Strict {
        return false;
    }

    let separated = name
        .strip_suffix(token)
        .and_then(|head| head.chars().last())
        .is_some_and(|c| SEPARATORS.contains(&c));

    separated || bracketed(name, token, '[', ']') || bracketed(name, token, '(', ')')
}

/// `<something>[token]` at the end of the name
fn bracketed(name: &str, token: &str, open: char, close: char) -> bool {
    name.strip_suffix(close)
        .and_then(|rest| rest.strip_suffix(token))
        .and_then(|rest| rest.strip_suffix(open))
        .is_some_and(|head| !head.is_empty())
}
