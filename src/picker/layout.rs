//! Column sizing and label placement.

use super::unit::Unit;
use serde::{Deserialize, Serialize};

/// A UIPickerView-style wheel leaves this much space between columns.
pub const STANDARD_COMPONENT_SPACING: f64 = 5.0;
/// Space between a column's numbers and its label.
pub const LABEL_SPACING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: f64,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "system".to_string(),
            size: 17.0,
        }
    }
}

impl Font {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

/// Text measurement, supplied by the host's text system.
pub trait TextMeasure {
    fn measure(&self, text: &str, font: &Font) -> f64;
}

/// Fixed advance per character, 0.6 em.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonospaceMeasure;

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str, font: &Font) -> f64 {
        text.chars().count() as f64 * font.size * 0.6
    }
}

/// Widest rendering of the row numbers `0..rows`.
///
/// Digits are assumed to share one advance within a number, so each
/// length is sampled with its repeated-digit numbers plus the last row.
pub fn number_width(measure: &dyn TextMeasure, font: &Font, rows: usize) -> f64 {
    let Some(last) = rows.checked_sub(1) else {
        return 0.0;
    };
    let last_text = last.to_string();
    let mut widest = measure.measure(&last_text, font);

    for len in 1..=last_text.len() {
        for digit in ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'] {
            if len > 1 && digit == '0' {
                continue;
            }
            let text: String = std::iter::repeat_n(digit, len).collect();
            if text.len() < last_text.len() || text <= last_text {
                widest = widest.max(measure.measure(&text, font));
            }
        }
    }
    widest
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnLayout {
    pub unit: Unit,
    pub number_width: f64,
    pub label_width: f64,
    /// Width handed to the wheel for this column.
    pub width: f64,
    /// Left edge of the label, in the host's coordinates.
    pub label_x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub columns: Vec<ColumnLayout>,
    pub total_width: f64,
}

pub fn column_width(number_width: f64, label_width: f64) -> f64 {
    number_width + label_width + LABEL_SPACING
}

pub fn total_width(columns: &[(Unit, f64, f64)]) -> f64 {
    let n = columns.len() as f64;
    let content: f64 = columns.iter().map(|(_, num, label)| num + label).sum();
    content + STANDARD_COMPONENT_SPACING * (n - 1.0).max(0.0) + LABEL_SPACING * n
}

/// Lays out `(unit, number width, label width)` columns centred on `mid_x`.
pub fn layout(columns: &[(Unit, f64, f64)], mid_x: f64) -> Layout {
    let total = total_width(columns);
    let mut current = mid_x - total / 2.0;
    let mut laid_out = Vec::with_capacity(columns.len());

    for &(unit, number, label) in columns {
        current += number + LABEL_SPACING;
        laid_out.push(ColumnLayout {
            unit,
            number_width: number,
            label_width: label,
            width: column_width(number, label),
            label_x: current,
        });
        current += label + STANDARD_COMPONENT_SPACING;
    }

    Layout {
        columns: laid_out,
        total_width: total,
    }
}
