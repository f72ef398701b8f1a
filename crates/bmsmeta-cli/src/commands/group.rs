//! Group command: the charts of one folder.

use std::path::Path;

use anyhow::Result;
use bmsmeta_core::load_group;
use tracing::info;

use crate::output::{format_group_console, render};
use crate::settings::Settings;

pub fn run(dir: &Path, settings: &Settings) -> Result<()> {
    let mut group = load_group(dir)?;
    if settings.scan.backfill_difficulty {
        group.backfill_difficulties();
    }
    info!("Loaded {} charts from {:?}", group.len(), dir);

    let text = render(&group, &settings.output, |color| {
        format_group_console(&group, color)
    })?;
    println!("{}", text.trim_end());
    Ok(())
}
