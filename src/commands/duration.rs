use crate::OutputFormat;
use crate::config::PickerConfig;
use crate::picker::decompose::{recompose, whole_seconds};
use crate::picker::unit::{Unit, UnitsStyle};
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct DecomposeReport {
    seconds: u64,
    components: Vec<ComponentReport>,
    leftover: u64,
    warnings: Vec<String>,
}

#[derive(Serialize)]
struct ComponentReport {
    unit: Unit,
    count: u64,
    rows: usize,
}

/// Split `seconds` over the configured units, largest first.
pub fn decompose(config: &PickerConfig, seconds: f64, format: OutputFormat) -> Result<()> {
    let picker = config.build()?;
    let secs = whole_seconds(seconds);
    let result = picker.decomposition(seconds);
    for warning in &result.warnings {
        log::warn!("{warning}");
    }

    let report = DecomposeReport {
        seconds: secs,
        components: result
            .counts
            .iter()
            .map(|(unit, count)| ComponentReport {
                unit: *unit,
                count: *count,
                rows: picker.row_count(*unit),
            })
            .collect(),
        leftover: result.leftover,
        warnings: result.warnings.iter().map(|w| w.to_string()).collect(),
    };

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("Failed to serialize result")?
            );
        }
        OutputFormat::Text => {
            println!("{:<10} {:>10} {:>8}", "Unit", "Count", "Rows");
            println!("{}", "-".repeat(30));
            for c in &report.components {
                println!("{:<10} {:>10} {:>8}", c.unit.to_string(), c.count, c.rows);
            }
            if report.leftover > 0 {
                println!("\nDropped: {}s below the smallest unit", report.leftover);
            }
            for w in &report.warnings {
                println!("⚠ {}", w);
            }
        }
    }

    Ok(())
}

/// Parse `unit=count` pairs, e.g. `hours=2`.
pub fn parse_parts(parts: &[String]) -> Result<Vec<(Unit, u64)>> {
    parts
        .iter()
        .map(|part| -> Result<(Unit, u64)> {
            let (unit, count) = part
                .split_once('=')
                .with_context(|| format!("Expected UNIT=COUNT, got '{}'", part))?;
            let unit: Unit = unit.parse()?;
            let count: u64 = count
                .trim()
                .parse()
                .with_context(|| format!("Invalid count in '{}'", part))?;
            Ok((unit, count))
        })
        .collect()
}

/// Sum `unit=count` pairs back into seconds.
pub fn compose(parts: &[String], format: OutputFormat) -> Result<()> {
    let counts = parse_parts(parts)?;
    let total = recompose(counts);
    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "seconds": total })),
        OutputFormat::Text => println!("{}", total),
    }
    Ok(())
}

/// Print `seconds` the way the picker would label it.
pub fn format(config: &PickerConfig, seconds: f64, style: Option<UnitsStyle>) -> Result<()> {
    let mut picker = config.build()?;
    if let Some(style) = style {
        picker.set_units_style(style);
    }
    picker.set_duration(seconds);
    println!("{}", picker.formatted());
    Ok(())
}
