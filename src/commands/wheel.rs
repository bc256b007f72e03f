use crate::OutputFormat;
use crate::commands::duration::parse_parts;
use crate::config::PickerConfig;
use crate::picker::decompose::CapacityWarning;
use crate::picker::{DurationPicker, PickerObserver};
use anyhow::{Context, Result};
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;

/// Counts change notifications and logs what it sees.
struct ChangeCounter(Rc<Cell<usize>>);

impl PickerObserver for ChangeCounter {
    fn value_changed(&mut self) {
        self.0.set(self.0.get() + 1);
        log::info!("selection changed");
    }

    fn capacity_exceeded(&mut self, warning: &CapacityWarning) {
        log::info!("capacity warning for {}", warning.unit);
    }
}

#[derive(Serialize)]
struct WheelReport {
    unit: String,
    raw_row: usize,
    value: usize,
    label: String,
}

#[derive(Serialize)]
struct SpinReport {
    seconds: u64,
    formatted: String,
    changes: usize,
    wheels: Vec<WheelReport>,
}

fn report(picker: &DurationPicker, changes: usize) -> Result<SpinReport> {
    let mut wheels = Vec::new();
    for (unit, label) in picker.units().iter().zip(picker.labels()) {
        wheels.push(WheelReport {
            unit: unit.to_string(),
            raw_row: picker.raw_row(*unit)?,
            value: picker.selected(*unit)?,
            label: label.clone(),
        });
    }
    Ok(SpinReport {
        seconds: picker.duration_secs(),
        formatted: picker.formatted(),
        changes,
        wheels,
    })
}

/// Drive a headless picker: set a duration, then replay user selections
/// given as `unit=row`.
pub fn spin(
    config: &PickerConfig,
    seconds: Option<f64>,
    animated: bool,
    selections: &[String],
    format: OutputFormat,
) -> Result<()> {
    let mut picker = config.build()?;
    let changes = Rc::new(Cell::new(0));
    picker.subscribe(Box::new(ChangeCounter(changes.clone())));

    if let Some(seconds) = seconds {
        if animated {
            picker.set_duration_animated(seconds);
        } else {
            picker.set_duration(seconds);
        }
    }

    for (unit, row) in parse_parts(selections)? {
        let row = usize::try_from(row).with_context(|| format!("Row {} is out of range", row))?;
        picker.user_selected(unit, row)?;
    }

    let report = report(&picker, changes.get())?;
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("Failed to serialize result")?
            );
        }
        OutputFormat::Text => {
            println!("{:<10} {:>10} {:>6}  {}", "Unit", "Row", "Value", "Label");
            println!("{}", "-".repeat(40));
            for w in &report.wheels {
                println!("{:<10} {:>10} {:>6}  {}", w.unit, w.raw_row, w.value, w.label);
            }
            println!("\nDuration: {} ({}s)", report.formatted, report.seconds);
        }
    }
    Ok(())
}

/// Print column widths and label positions for a picker `width` wide.
pub fn layout(config: &PickerConfig, width: f64, seconds: f64, format: OutputFormat) -> Result<()> {
    let mut picker = config.build()?;
    picker.set_duration(seconds);
    let layout = picker.layout(width / 2.0);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&layout).context("Failed to serialize layout")?
            );
        }
        OutputFormat::Text => {
            println!(
                "{:<10} {:>8} {:>8} {:>8} {:>8}",
                "Unit", "Numbers", "Label", "Width", "Label x"
            );
            println!("{}", "-".repeat(46));
            for c in &layout.columns {
                println!(
                    "{:<10} {:>8.1} {:>8.1} {:>8.1} {:>8.1}",
                    c.unit.to_string(),
                    c.number_width,
                    c.label_width,
                    c.width,
                    c.label_x
                );
            }
            println!("\nTotal width: {:.1}", layout.total_width);
        }
    }
    Ok(())
}
