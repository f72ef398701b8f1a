//! Parse command: one chart file.

use std::path::Path;

use anyhow::Result;
use bmsmeta_core::parse_chart;

use crate::output::{format_chart_console, render};
use crate::settings::Settings;

pub fn run(file: &Path, settings: &Settings) -> Result<()> {
    let mut chart = parse_chart(file)?;

    if settings.scan.backfill_difficulty {
        chart.backfill_difficulty();
    }

    let text = render(&chart, &settings.output, |color| {
        format_chart_console(&chart, color)
    })?;
    println!("{}", text.trim_end());
    Ok(())
}
