//! The duration picker: one wheel per active unit.
//!
//! The wheels hold the selection. The duration is always recomputed from
//! them on read and never cached.

pub mod decompose;
pub mod format;
pub mod labels;
pub mod layout;
pub mod looping;
pub mod unit;
pub mod wheels;

use crate::error::{PickerError, Result};
use decompose::{CapacityWarning, Decomposition, decompose, recompose, whole_seconds};
use labels::{EnglishStrings, StringResolver, unit_label};
use layout::{Font, Layout, MonospaceMeasure, TextMeasure, number_width};
use std::collections::{BTreeMap, HashSet};
use std::time::Duration;
use unit::{RowCounts, Unit, UnitsStyle};
use wheels::{MemoryWheels, Wheels};

/// Receives picker notifications. Runs synchronously on the caller's thread.
pub trait PickerObserver {
    /// The logical selection changed; re-read what you need.
    fn value_changed(&mut self);

    fn capacity_exceeded(&mut self, _warning: &CapacityWarning) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Construction-time settings.
#[derive(Debug, Clone)]
pub struct PickerOptions {
    pub units: Vec<Unit>,
    pub rows: Vec<(Unit, i64)>,
    pub loops: bool,
    pub units_style: UnitsStyle,
    pub number_font: Font,
    pub text_font: Font,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            units: vec![Unit::Hours, Unit::Minutes, Unit::Seconds],
            rows: Vec::new(),
            loops: false,
            units_style: UnitsStyle::Full,
            number_font: Font::default(),
            text_font: Font::default(),
        }
    }
}

impl PickerOptions {
    pub fn with_units(mut self, units: impl Into<Vec<Unit>>) -> Self {
        self.units = units.into();
        self
    }

    pub fn with_rows(mut self, unit: Unit, count: i64) -> Self {
        self.rows.push((unit, count));
        self
    }

    pub fn with_loops(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }

    pub fn with_units_style(mut self, style: UnitsStyle) -> Self {
        self.units_style = style;
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.number_font = font.clone();
        self.text_font = font;
        self
    }
}

fn validate_units(units: &[Unit]) -> Result<()> {
    if units.is_empty() {
        return Err(PickerError::EmptyUnits);
    }
    let mut seen = HashSet::new();
    for unit in units {
        if !seen.insert(*unit) {
            return Err(PickerError::DuplicateUnit(*unit));
        }
    }
    Ok(())
}

pub struct DurationPicker<W: Wheels = MemoryWheels> {
    units: Vec<Unit>,
    rows: RowCounts,
    loops: bool,
    style: UnitsStyle,
    number_font: Font,
    text_font: Font,
    wheels: W,
    resolver: Box<dyn StringResolver>,
    measure: Box<dyn TextMeasure>,
    // per column, rebuilt by reload_data
    number_widths: Vec<f64>,
    // per column, rebuilt whenever a count or the text may change
    labels: Vec<String>,
    label_widths: Vec<f64>,
    observers: Vec<(ObserverId, Box<dyn PickerObserver>)>,
    next_observer: u64,
}

impl DurationPicker<MemoryWheels> {
    /// Headless picker with English labels and monospace metrics.
    pub fn new(options: PickerOptions) -> Result<Self> {
        Self::with_parts(options, MemoryWheels::new(), Box::new(EnglishStrings), Box::new(MonospaceMeasure))
    }
}

impl<W: Wheels> DurationPicker<W> {
    pub fn with_parts(
        options: PickerOptions,
        wheels: W,
        resolver: Box<dyn StringResolver>,
        measure: Box<dyn TextMeasure>,
    ) -> Result<Self> {
        validate_units(&options.units)?;
        let mut rows = RowCounts::default();
        for (unit, count) in &options.rows {
            if !options.units.contains(unit) {
                return Err(PickerError::UnsupportedUnit(*unit));
            }
            rows.set(*unit, *count)?;
        }

        let mut picker = Self {
            units: options.units,
            rows,
            loops: options.loops,
            style: options.units_style,
            number_font: options.number_font,
            text_font: options.text_font,
            wheels,
            resolver,
            measure,
            number_widths: Vec::new(),
            labels: Vec::new(),
            label_widths: Vec::new(),
            observers: Vec::new(),
            next_observer: 0,
        };
        picker.reload_data();
        picker.reset_to_default();
        Ok(picker)
    }

    // ---- configuration ----

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn row_count(&self, unit: Unit) -> usize {
        self.rows.get(unit)
    }

    pub fn loops(&self) -> bool {
        self.loops
    }

    pub fn units_style(&self) -> UnitsStyle {
        self.style
    }

    pub fn number_font(&self) -> &Font {
        &self.number_font
    }

    pub fn text_font(&self) -> &Font {
        &self.text_font
    }

    pub fn wheels(&self) -> &W {
        &self.wheels
    }

    /// Replace the active columns. The selection resets to zero.
    ///
    /// Rejected lists (empty, or with a repeated unit) leave the picker
    /// untouched.
    pub fn set_active_units(&mut self, units: Vec<Unit>) -> Result<()> {
        validate_units(&units)?;
        log::debug!("active units: {:?}", units);
        self.units = units;
        self.reload_data();
        self.reset_to_default();
        self.notify_changed();
        Ok(())
    }

    /// Override the number of rows for an active unit.
    ///
    /// A selection that no longer fits is clamped to the last row; other
    /// selections are kept.
    pub fn set_row_count(&mut self, unit: Unit, count: i64) -> Result<()> {
        if !self.units.contains(&unit) {
            return Err(PickerError::UnsupportedUnit(unit));
        }
        let rows = unit::validate_row_count(unit, count)?;
        let before = self.logical_selection();

        log::debug!("rows for {unit}: {rows}");
        self.rows.set(unit, count)?;
        self.reload_data();
        self.reseat(&before);

        if self.logical_selection() != before {
            self.notify_changed();
        }
        Ok(())
    }

    /// Toggle loop mode. Logical values survive the switch.
    pub fn set_loops(&mut self, loops: bool) {
        if self.loops == loops {
            return;
        }
        let before = self.logical_selection();
        self.loops = loops;
        self.reload_data();
        self.reseat(&before);
    }

    pub fn set_font(&mut self, font: Font) {
        self.number_font = font.clone();
        self.text_font = font;
        self.reload_data();
    }

    pub fn set_number_font(&mut self, font: Font) {
        self.number_font = font;
        self.reload_data();
    }

    pub fn set_text_font(&mut self, font: Font) {
        self.text_font = font;
        self.refresh_labels();
    }

    pub fn set_units_style(&mut self, style: UnitsStyle) {
        self.style = style;
        self.refresh_labels();
    }

    // ---- observers ----

    pub fn subscribe(&mut self, observer: Box<dyn PickerObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    // ---- selection ----

    /// Current duration in whole seconds.
    pub fn duration_secs(&self) -> u64 {
        recompose(self.components_in_order())
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs())
    }

    /// Spin the wheels to `seconds` without animation.
    pub fn set_duration(&mut self, seconds: f64) -> Vec<CapacityWarning> {
        self.apply_duration(seconds, false)
    }

    /// Like [`set_duration`](Self::set_duration), but the wheels animate.
    /// The logical selection is updated before this returns.
    pub fn set_duration_animated(&mut self, seconds: f64) -> Vec<CapacityWarning> {
        self.apply_duration(seconds, true)
    }

    /// How `seconds` splits over the active units and their row counts.
    /// The wheels are not touched.
    pub fn decomposition(&self, seconds: f64) -> Decomposition {
        if seconds < 0.0 || seconds.is_nan() {
            log::debug!("clamping requested duration {seconds} to 0");
        }
        decompose(whole_seconds(seconds), &self.units, &self.rows)
    }

    /// Logical count per active unit.
    pub fn components(&self) -> BTreeMap<Unit, u64> {
        self.components_in_order().into_iter().collect()
    }

    /// Logical count per active unit, in column order.
    pub fn components_in_order(&self) -> Vec<(Unit, u64)> {
        self.units
            .iter()
            .zip(self.logical_selection())
            .map(|(unit, value)| (*unit, value as u64))
            .collect()
    }

    pub fn selected(&self, unit: Unit) -> Result<usize> {
        let column = self.column_of(unit)?;
        Ok(self.logical_row(column))
    }

    /// Raw wheel row for `unit`, including the loop repetition.
    pub fn raw_row(&self, unit: Unit) -> Result<usize> {
        let column = self.column_of(unit)?;
        Ok(self.wheels.selected_row(column))
    }

    /// Forward a selection the user made on the wheel itself.
    pub fn user_selected(&mut self, unit: Unit, raw_row: usize) -> Result<()> {
        let column = self.column_of(unit)?;
        self.wheels.select_row(column, raw_row, false);

        if self.loops {
            let rows = self.rows.get(unit);
            let current = self.wheels.selected_row(column);
            if let Some(middle) = looping::recenter(current, rows) {
                log::debug!("recentering {unit} from row {current} to {middle}");
                self.wheels.select_row(column, middle, false);
            }
        }

        self.refresh_labels();
        self.notify_changed();
        Ok(())
    }

    // ---- presentation ----

    /// Label text per column, matching the current counts.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The selection as text, e.g. `1 hour 1 minute 1 second`.
    pub fn formatted(&self) -> String {
        format::format_duration(&self.components_in_order(), self.style, self.resolver.as_ref())
    }

    /// Column widths and label origins for a picker centred on `mid_x`.
    pub fn layout(&self, mid_x: f64) -> Layout {
        let columns: Vec<(Unit, f64, f64)> = self
            .units
            .iter()
            .enumerate()
            .map(|(i, unit)| (*unit, self.number_widths[i], self.label_widths[i]))
            .collect();
        layout::layout(&columns, mid_x)
    }

    /// Rebuild wheels, number widths and labels from the configuration.
    pub fn reload_data(&mut self) {
        let raw: Vec<usize> = self
            .units
            .iter()
            .map(|u| looping::raw_rows(self.rows.get(*u), self.loops))
            .collect();
        self.wheels.reload(&raw);

        self.number_widths = self
            .units
            .iter()
            .map(|u| number_width(self.measure.as_ref(), &self.number_font, self.rows.get(*u)))
            .collect();
        self.refresh_labels();
    }

    // ---- internals ----

    fn column_of(&self, unit: Unit) -> Result<usize> {
        self.units
            .iter()
            .position(|u| *u == unit)
            .ok_or(PickerError::UnsupportedUnit(unit))
    }

    fn logical_row(&self, column: usize) -> usize {
        let raw = self.wheels.selected_row(column);
        if self.loops {
            looping::logical(raw, self.rows.get(self.units[column]))
        } else {
            raw
        }
    }

    fn logical_selection(&self) -> Vec<usize> {
        (0..self.units.len()).map(|c| self.logical_row(c)).collect()
    }

    fn reset_to_default(&mut self) {
        for (column, unit) in self.units.iter().enumerate() {
            let row = looping::default_row(self.rows.get(*unit), self.loops);
            self.wheels.select_row(column, row, false);
        }
        self.refresh_labels();
    }

    /// Put each column back on its logical value, clamped to its rows.
    fn reseat(&mut self, values: &[usize]) {
        for (column, (unit, value)) in self.units.iter().zip(values).enumerate() {
            let rows = self.rows.get(*unit);
            let value = (*value).min(rows.saturating_sub(1));
            let row = if self.loops {
                looping::centered(value, rows)
            } else {
                value
            };
            self.wheels.select_row(column, row, false);
        }
        self.refresh_labels();
    }

    fn apply_duration(&mut self, seconds: f64, animated: bool) -> Vec<CapacityWarning> {
        let result = self.decomposition(seconds);

        for warning in &result.warnings {
            log::warn!("{warning}");
            for (_, observer) in self.observers.iter_mut() {
                observer.capacity_exceeded(warning);
            }
        }

        for (column, (unit, count)) in result.counts.iter().enumerate() {
            let count = usize::try_from(*count).unwrap_or(usize::MAX);
            let row = if self.loops {
                let current = self.wheels.selected_row(column);
                looping::wrapped(current, count, self.rows.get(*unit))
            } else {
                count
            };
            self.wheels.select_row(column, row, animated);
        }

        self.refresh_labels();
        self.notify_changed();
        result.warnings
    }

    fn refresh_labels(&mut self) {
        let mut labels = Vec::with_capacity(self.units.len());
        let mut widths = Vec::with_capacity(self.units.len());
        for (column, unit) in self.units.iter().enumerate() {
            let text = unit_label(self.resolver.as_ref(), *unit, self.style, self.logical_row(column));
            widths.push(self.measure.measure(&text, &self.text_font));
            labels.push(text);
        }
        self.labels = labels;
        self.label_widths = widths;
    }

    fn notify_changed(&mut self) {
        for (_, observer) in self.observers.iter_mut() {
            observer.value_changed();
        }
    }
}
