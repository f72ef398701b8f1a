//! Scan command: every chart folder below a root.

use std::path::Path;

use anyhow::{Context, Result};
use bmsmeta_core::find_groups;

use crate::output::{format_group_console, render};
use crate::settings::Settings;

pub fn run(root: &Path, settings: &Settings) -> Result<()> {
    let mut groups =
        find_groups(root).with_context(|| format!("Failed to scan {:?}", root))?;
    if settings.scan.backfill_difficulty {
        groups.iter_mut().for_each(|g| g.backfill_difficulties());
    }

    let text = render(&groups, &settings.output, |color| {
        groups
            .iter()
            .map(|g| format_group_console(g, color))
            .collect::<String>()
    })?;
    println!("{}", text.trim_end());

    let charts: usize = groups.iter().map(|g| g.len()).sum();
    eprintln!("{} folders, {} charts", groups.len(), charts);
    Ok(())
}
