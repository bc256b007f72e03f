//! Conversion between a scalar duration and per-unit counts.
//!
//! Decomposition is greedy, largest unit first. A unit's count is never
//! capped by its row limit while computing; overflow is reported as a
//! [`CapacityWarning`] and left to the column to clamp or wrap.

use super::unit::{RowCounts, Unit};
use serde::Serialize;
use std::fmt;

/// A decomposed count that the unit's column cannot display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapacityWarning {
    pub unit: Unit,
    pub count: u64,
    pub rows: usize,
}

impl fmt::Display for CapacityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "not enough rows to display the requested duration (requires {} rows for '{}', maximum is {})",
            self.count + 1,
            self.unit,
            self.rows
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decomposition {
    /// Counts in the order the units were given.
    pub counts: Vec<(Unit, u64)>,
    pub warnings: Vec<CapacityWarning>,
    /// Seconds smaller than the smallest unit, dropped.
    pub leftover: u64,
}

impl Decomposition {
    pub fn count(&self, unit: Unit) -> Option<u64> {
        self.counts
            .iter()
            .find(|(u, _)| *u == unit)
            .map(|(_, count)| *count)
    }
}

/// Whole seconds of a requested interval. Negative and NaN become zero,
/// fractions are truncated.
pub fn whole_seconds(seconds: f64) -> u64 {
    if seconds.is_nan() || seconds <= 0.0 {
        return 0;
    }
    // `as` saturates at u64::MAX for huge values
    seconds.trunc() as u64
}

pub fn decompose(seconds: u64, units: &[Unit], rows: &RowCounts) -> Decomposition {
    let mut sorted: Vec<Unit> = units.to_vec();
    // stable, so equal magnitudes keep configuration order
    sorted.sort_by(|a, b| b.as_seconds().cmp(&a.as_seconds()));

    let mut remaining = seconds;
    let mut counts: Vec<(Unit, u64)> = units.iter().map(|u| (*u, 0)).collect();
    let mut warnings = Vec::new();

    for unit in sorted {
        let factor = unit.as_seconds();
        let count = remaining / factor;
        remaining -= count * factor;

        let limit = rows.get(unit);
        if count >= limit as u64 {
            warnings.push(CapacityWarning {
                unit,
                count,
                rows: limit,
            });
        }
        if let Some(slot) = counts.iter_mut().find(|(u, _)| *u == unit) {
            slot.1 = count;
        }
    }

    Decomposition {
        counts,
        warnings,
        leftover: remaining,
    }
}

pub fn recompose<I>(counts: I) -> u64
where
    I: IntoIterator<Item = (Unit, u64)>,
{
    counts
        .into_iter()
        .map(|(unit, count)| count.saturating_mul(unit.as_seconds()))
        .fold(0u64, u64::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DHMS: [Unit; 4] = [Unit::Days, Unit::Hours, Unit::Minutes, Unit::Seconds];

    #[test]
    fn test_greedy_hours_overflow() {
        let units = [Unit::Hours, Unit::Minutes, Unit::Seconds];
        let result = decompose(90_061, &units, &RowCounts::default());

        assert_eq!(
            result.counts,
            vec![(Unit::Hours, 25), (Unit::Minutes, 1), (Unit::Seconds, 1)]
        );
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].unit, Unit::Hours);
        assert_eq!(result.warnings[0].count, 25);
        assert_eq!(result.warnings[0].rows, 24);
        assert_eq!(recompose(result.counts), 90_061);
    }

    #[test]
    fn test_round_trip_day_range() {
        let rows = RowCounts::default();
        for d in (0..(24 * 3600 + 59 * 60 + 59)).step_by(7) {
            let result = decompose(d, &DHMS, &rows);
            assert_eq!(result.leftover, 0);
            assert!(result.warnings.is_empty(), "unexpected warning for {d}");
            assert_eq!(recompose(result.counts), d);
        }
    }

    #[test]
    fn test_unsorted_units_keep_configuration_order() {
        let units = [Unit::Seconds, Unit::Days, Unit::Minutes];
        let result = decompose(86_400 + 125, &units, &RowCounts::default());

        assert_eq!(
            result.counts,
            vec![(Unit::Seconds, 5), (Unit::Days, 1), (Unit::Minutes, 2)]
        );
    }

    #[test]
    fn test_leftover_below_smallest_unit_is_dropped() {
        let units = [Unit::Hours, Unit::Minutes];
        let result = decompose(3_725, &units, &RowCounts::default());

        assert_eq!(result.count(Unit::Hours), Some(1));
        assert_eq!(result.count(Unit::Minutes), Some(2));
        assert_eq!(result.leftover, 5);
        assert_eq!(recompose(result.counts), 3_720);
    }

    #[test]
    fn test_recompose_is_order_independent() {
        let a = [(Unit::Hours, 2), (Unit::Minutes, 30), (Unit::Seconds, 9)];
        let b = [(Unit::Seconds, 9), (Unit::Hours, 2), (Unit::Minutes, 30)];
        assert_eq!(recompose(a), recompose(b));
        assert_eq!(recompose(a), 9_009);
    }

    #[test]
    fn test_whole_seconds_clamps_and_truncates() {
        assert_eq!(whole_seconds(-12.0), 0);
        assert_eq!(whole_seconds(f64::NAN), 0);
        assert_eq!(whole_seconds(59.999), 59);
        assert_eq!(whole_seconds(3661.0), 3661);
    }

    #[test]
    fn test_warning_message() {
        let warning = CapacityWarning {
            unit: Unit::Hours,
            count: 25,
            rows: 24,
        };
        assert_eq!(
            warning.to_string(),
            "not enough rows to display the requested duration (requires 26 rows for 'hours', maximum is 24)"
        );
    }
}
