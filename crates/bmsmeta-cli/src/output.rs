//! Console and JSON rendering of chart records

use std::fmt::Write as _;

use anyhow::Result;
use bmsmeta_core::{ChartGroup, ChartMetadata, Difficulty};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::settings::{OutputFormat, OutputSettings};

pub fn render<T: Serialize>(
    value: &T,
    settings: &OutputSettings,
    console: impl FnOnce(bool) -> String,
) -> Result<String> {
    match settings.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Console => Ok(console(settings.color)),
    }
}

/// Difficulty label with its name (e.g. "3 HYPER") in its conventional color.
///
/// Unknown labels are shown verbatim, `-` when empty.
pub fn format_difficulty(chart: &ChartMetadata, color: bool) -> String {
    let Some(difficulty) = chart.difficulty() else {
        let raw = if chart.difficulty.is_empty() {
            "-"
        } else {
            chart.difficulty.as_str()
        };
        return if color {
            raw.dimmed().to_string()
        } else {
            raw.to_string()
        };
    };

    let label = format!("{} {}", difficulty.label(), difficulty.expand_name());
    if !color {
        return label;
    }
    match difficulty {
        Difficulty::Beginner => label.green().to_string(),
        Difficulty::Normal => label.blue().to_string(),
        Difficulty::Hyper => label.yellow().to_string(),
        Difficulty::Another => label.red().to_string(),
        Difficulty::Insane => label.magenta().to_string(),
    }
}

/// One chart as two lines: headline and details
pub fn format_chart_console(chart: &ChartMetadata, color: bool) -> String {
    let mut output = String::new();
    let title = if color {
        chart.title.bold().to_string()
    } else {
        chart.title.clone()
    };

    let _ = writeln!(
        output,
        "  [{}] {} {} ({} Lv.{}, {} notes)",
        format_difficulty(chart, color),
        title,
        chart.subtitle,
        chart.keymode,
        chart.play_level,
        chart.total_notes
    );
    let _ = writeln!(
        output,
        "      {} / {}  {}",
        chart.artist,
        chart.genre,
        chart.path.display()
    );
    output
}

pub fn format_group_console(group: &ChartGroup, color: bool) -> String {
    let mut output = String::new();
    let border = "━".repeat(50);
    let border = if color {
        border.dimmed().to_string()
    } else {
        border
    };
    let name = if group.name.is_empty() {
        "(no charts)"
    } else {
        group.name.as_str()
    };

    let _ = writeln!(output, "{}", border);
    let _ = writeln!(output, "  {}  {}", name, group.path.display());
    let _ = writeln!(output, "{}", border);
    for chart in &group.charts {
        output.push_str(&format_chart_console(chart, color));
    }
    output
}
