//! Folder-level loading: one chart group per folder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::chart::{ChartGroup, is_chart_path};
use crate::error::Result;
use crate::infer::assign_group_difficulties;
use crate::parser::parse_chart;

/// Load every chart in `folder` (not recursive) into one group.
///
/// Charts without notes are dropped, then difficulties are inferred from the
/// sibling file names. The first chart that fails to parse aborts the whole
/// group. An unreadable folder yields an empty group.
pub fn load_group<P: AsRef<Path>>(folder: P) -> Result<ChartGroup> {
    let folder = folder.as_ref();
    let mut group = ChartGroup::new(folder);

    for path in list_dir(folder).into_iter().filter(|p| is_chart_file(p)) {
        group.push(parse_chart(&path)?);
    }
    assign_group_difficulties(&mut group);

    debug!("Loaded {} charts from {:?}", group.len(), folder);
    Ok(group)
}

/// Walk `root` and load one group per folder that holds charts.
///
/// A folder with at least one chart is loaded as a group and its subfolders
/// are not visited; other folders are descended in name order.
pub fn find_groups<P: AsRef<Path>>(root: P) -> Result<Vec<ChartGroup>> {
    let mut groups = Vec::new();
    collect_groups(root.as_ref(), &mut groups)?;
    info!("Found {} chart folders under {:?}", groups.len(), root.as_ref());
    Ok(groups)
}

fn collect_groups(folder: &Path, groups: &mut Vec<ChartGroup>) -> Result<()> {
    let entries = list_dir(folder);

    if entries.iter().any(|p| is_chart_file(p)) {
        groups.push(load_group(folder)?);
        return Ok(());
    }

    for dir in entries.iter().filter(|p| p.is_dir()) {
        collect_groups(dir, groups)?;
    }
    Ok(())
}

fn is_chart_file(path: &Path) -> bool {
    is_chart_path(path) && path.is_file()
}

/// Entries of a folder sorted by name; listing failures read as empty
fn list_dir(folder: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Failed to list {:?}: {}", folder, e);
            return Vec::new();
        }
    };

    sorted_entries(folder, entries.map(|entry| entry.map(|e| e.path())))
}

/// Keep the readable entries, sorted; unreadable ones are logged and skipped
fn sorted_entries(
    folder: &Path,
    entries: impl Iterator<Item = io::Result<PathBuf>>,
) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable entry in {:?}: {}", folder, e);
                None
            }
        })
        .collect();
    paths.sort();
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_folder_is_empty_group() {
        let temp = TempDir::new().unwrap();
        let group = load_group(temp.path().join("nope")).unwrap();
        assert!(group.is_empty());
        assert!(group.name.is_empty());
    }

    #[test]
    fn test_list_dir_is_sorted() {
        let temp = TempDir::new().unwrap();
        for name in ["c.bms", "a.bms", "b.txt"] {
            fs::write(temp.path().join(name), "").unwrap();
        }
        let names: Vec<_> = list_dir(temp.path())
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.bms", "b.txt", "c.bms"]);
    }

    #[test]
    fn test_unreadable_entries_are_skipped() {
        let entries = vec![
            Ok(PathBuf::from("songs/b.bms")),
            Err(io::Error::from(io::ErrorKind::PermissionDenied)),
            Ok(PathBuf::from("songs/a.bms")),
        ];
        let paths = sorted_entries(Path::new("songs"), entries.into_iter());
        assert_eq!(
            paths,
            [PathBuf::from("songs/a.bms"), PathBuf::from("songs/b.bms")]
        );
    }

    #[test]
    fn test_chart_named_folder_is_not_a_chart() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("x.bms")).unwrap();
        assert!(!is_chart_file(&temp.path().join("x.bms")));
    }
}
