use std::sync::LazyLock;

use regex::Regex;
use strum::IntoEnumIterator;

use crate::chart::Difficulty;

/// Bracket pairs that may wrap a difficulty keyword, in priority order
const DIFFICULTY_BRACKETS: [(&str, &str); 4] = [("[", "]"), ("(", ")"), ("-", "-"), ("【", "】")];

/// Bracket pairs that may wrap a variant tag at the end of a title
const SUFFIX_BRACKETS: [(&str, &str); 9] = [
    ("[", "]"),
    ("［", "］"),
    ("(", ")"),
    ("（", "）"),
    ("-", "-"),
    ("【", "】"),
    ("<", ">"),
    ("〈", "〉"),
    ("⟨", "⟩"),
];

/// `... [... black ... another ...]` - an alias for insane
static BLACK_ANOTHER: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DIFFICULTY_BRACKETS
        .iter()
        .map(|&(open, close)| trailing_segment(open, ".*black.*another.*", close))
        .collect()
});

/// Keyword-major: every bracket style of `beginner` before any of `normal`
static KEYWORD_PATTERNS: LazyLock<Vec<(Difficulty, Regex)>> = LazyLock::new(|| {
    Difficulty::iter()
        .flat_map(|difficulty| {
            DIFFICULTY_BRACKETS.iter().map(move |&(open, close)| {
                let body = format!(".*{}.*", difficulty.keyword());
                (difficulty, trailing_segment(open, &body, close))
            })
        })
        .collect()
});

static SUFFIX_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SUFFIX_BRACKETS
        .iter()
        .map(|&(open, close)| {
            let pattern = format!(
                "^.+({}[^{}]+{})$",
                regex::escape(open),
                regex::escape(open),
                regex::escape(close)
            );
            Regex::new(&pattern).expect("suffix pattern is valid")
        })
        .collect()
});

static BMS_EDIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("bms ?edit").expect("bms edit pattern is valid"));

/// `<something><open><body><close>` anchored at the end
fn trailing_segment(open: &str, body: &str, close: &str) -> Regex {
    let pattern = format!("^.+{}{}{}$", regex::escape(open), body, regex::escape(close));
    Regex::new(&pattern).expect("difficulty pattern is valid")
}

/// Infer a difficulty from a bracketed keyword closing the title.
///
/// `title` and `subtitle` are concatenated without a separator, then trimmed and
/// lower-cased. "black another" in any bracket style wins over the keyword scan.
pub fn difficulty_from_title(title: &str, subtitle: &str) -> Option<Difficulty> {
    let full_title = format!("{title}{subtitle}").trim().to_lowercase();

    if BLACK_ANOTHER.iter().any(|re| re.is_match(&full_title)) {
        return Some(Difficulty::Insane);
    }

    KEYWORD_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(&full_title))
        .map(|(difficulty, _)| *difficulty)
}

/// Strip a trailing bracketed variant tag such as `[Hard]` or `(ANOTHER)`.
///
/// Tags mentioning "bms edit" (with or without the space) are part of the
/// title and are kept. Titles without a tag are returned trimmed.
pub fn recover_title_suffix(title: &str) -> String {
    let title = title.trim();

    for re in SUFFIX_PATTERNS.iter() {
        let Some(tag) = re.captures(title).and_then(|caps| caps.get(1)) else {
            continue;
        };
        if BMS_EDIT.is_match(&tag.as_str().to_lowercase()) {
            return title.to_string();
        }
        return title[..tag.start()].trim().to_string();
    }
    title.to_string()
}
