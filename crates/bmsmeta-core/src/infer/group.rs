use tracing::debug;

use crate::chart::ChartGroup;
use crate::infer::{MatchMode, difficulty_from_name};

/// Infer difficulties from sibling file names.
///
/// The lower-cased base names of all charts are stripped of their longest
/// common prefix and each remainder is matched strictly, e.g.
/// `bmsN`, `bmsH`, `BmsA` -> `n`, `h`, `a` -> "2", "3", "4". Every chart
/// receives its own result, an empty label included.
///
/// Nothing happens for groups of fewer than two charts or when the names
/// share no prefix at all.
pub fn assign_group_difficulties(group: &mut ChartGroup) {
    if group.charts.len() < 2 {
        return;
    }

    let names: Vec<Vec<char>> = group
        .charts
        .iter()
        .map(|chart| chart.pure_name().to_lowercase().chars().collect())
        .collect();

    let shared = common_prefix_len(&names);
    if shared == 0 {
        debug!("No shared file name prefix in {:?}", group.path);
        return;
    }

    for (chart, name) in group.charts.iter_mut().zip(&names) {
        let rest: String = name[shared..].iter().collect();
        let difficulty = difficulty_from_name(&rest, MatchMode::Strict);
        debug!("{:?}: suffix {:?} -> {:?}", chart.path, rest, difficulty);
        chart.set_difficulty(difficulty);
    }
}

/// Longest prefix shared by every name, counted in chars
fn common_prefix_len(names: &[Vec<char>]) -> usize {
    let Some((first, rest)) = names.split_first() else {
        return 0;
    };
    rest.iter().fold(first.len(), |len, name| {
        first
            .iter()
            .zip(name)
            .take(len)
            .take_while(|(a, b)| a == b)
            .count()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartMetadata;

    fn group_of(names: &[&str]) -> ChartGroup {
        let mut group = ChartGroup::new("songs/x");
        for name in names {
            group.push(ChartMetadata {
                total_notes: 1,
                ..ChartMetadata::new_text(format!("songs/x/{name}"))
            });
        }
        group
    }

    fn labels(group: &ChartGroup) -> Vec<&str> {
        group.charts.iter().map(|c| c.difficulty.as_str()).collect()
    }

    fn chars(names: &[&str]) -> Vec<Vec<char>> {
        names.iter().map(|n| n.chars().collect()).collect()
    }

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(common_prefix_len(&chars(&["bmsn", "bmsh", "bmsa"])), 3);
        assert_eq!(common_prefix_len(&chars(&["a", "b"])), 0);
        assert_eq!(common_prefix_len(&chars(&["abc", "ab"])), 2);
        assert_eq!(common_prefix_len(&chars(&["same", "same"])), 4);
        assert_eq!(common_prefix_len(&chars(&["曲名_n", "曲名_h"])), 3);
        assert_eq!(common_prefix_len(&[]), 0);
    }

    #[test]
    fn test_sibling_suffixes() {
        let mut group = group_of(&["bmsN.bms", "bmsH.bms", "BmsA.bms"]);
        assign_group_difficulties(&mut group);
        assert_eq!(labels(&group), ["2", "3", "4"]);
    }

    #[test]
    fn test_keymode_qualified_suffixes() {
        let mut group = group_of(&["song_7b.bme", "song_7h.bme", "song_7another.bme"]);
        assign_group_difficulties(&mut group);
        assert_eq!(labels(&group), ["1", "3", "4"]);
    }

    #[test]
    fn test_no_shared_prefix_leaves_labels() {
        let mut group = group_of(&["a.bms", "b.bms"]);
        group.charts[0].difficulty = "4".to_string();
        assign_group_difficulties(&mut group);
        assert_eq!(labels(&group), ["4", ""]);
    }

    #[test]
    fn test_unmatched_suffix_clears_label() {
        let mut group = group_of(&["song_n.bms", "song_extra.bms"]);
        group.charts[1].difficulty = "5".to_string();
        assign_group_difficulties(&mut group);
        assert_eq!(labels(&group), ["2", ""]);
    }

    #[test]
    fn test_single_chart_is_untouched() {
        let mut group = group_of(&["bmsN.bms"]);
        assign_group_difficulties(&mut group);
        assert_eq!(labels(&group), [""]);
    }

    #[test]
    fn test_multibyte_prefix() {
        let mut group = group_of(&["曲名n.bms", "曲名h.bms"]);
        assign_group_difficulties(&mut group);
        assert_eq!(labels(&group), ["2", "3"]);
    }
}
