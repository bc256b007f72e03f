//! Index arithmetic for loop mode.
//!
//! A looping column repeats its logical rows `LOOP_MULTIPLIER` times so it
//! appears endless. The logical value is always `raw % rows`.

/// Repetitions of the logical rows in a looping column.
pub const LOOP_MULTIPLIER: usize = 1000;

pub fn raw_rows(rows: usize, loops: bool) -> usize {
    if loops {
        rows.saturating_mul(LOOP_MULTIPLIER)
    } else {
        rows
    }
}

pub fn logical(raw: usize, rows: usize) -> usize {
    if rows == 0 { 0 } else { raw % rows }
}

/// First raw row of the repetition containing `raw`.
pub fn band_base(raw: usize, rows: usize) -> usize {
    raw - logical(raw, rows)
}

/// Raw row of `value` in the middle repetition.
pub fn centered(value: usize, rows: usize) -> usize {
    rows.saturating_mul(LOOP_MULTIPLIER / 2).saturating_add(value)
}

/// Row a freshly configured column starts on.
pub fn default_row(rows: usize, loops: bool) -> usize {
    if loops { centered(0, rows) } else { 0 }
}

/// The middle half of the repetitions; a wheel resting here is far from
/// both ends.
pub fn in_safe_band(raw: usize, rows: usize) -> bool {
    let low = rows.saturating_mul(LOOP_MULTIPLIER / 4);
    let high = rows.saturating_mul(LOOP_MULTIPLIER * 3 / 4);
    raw >= low && raw < high
}

/// Raw row showing `count % rows` in the repetition of `current`, or in
/// the middle repetition when that one is outside the safe band.
pub fn wrapped(current: usize, count: usize, rows: usize) -> usize {
    let value = logical(count, rows);
    let row = band_base(current, rows).saturating_add(value);
    if in_safe_band(row, rows) {
        row
    } else {
        centered(value, rows)
    }
}

/// Where a user-driven selection should rest, if it must move at all.
pub fn recenter(raw: usize, rows: usize) -> Option<usize> {
    if in_safe_band(raw, rows) {
        None
    } else {
        Some(centered(logical(raw, rows), rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_row_sits_in_middle_band() {
        assert_eq!(default_row(60, false), 0);
        assert_eq!(default_row(60, true), 30_000);
        assert!(in_safe_band(default_row(60, true), 60));
    }

    #[test]
    fn test_band_base_keeps_repetition() {
        assert_eq!(band_base(30_017, 60), 30_000);
        assert_eq!(band_base(59, 60), 0);
        assert_eq!(logical(30_017, 60), 17);
    }

    #[test]
    fn test_wrapped_stays_in_band() {
        assert_eq!(wrapped(30_017, 5, 60), 30_005);
        assert_eq!(wrapped(30_017, 65, 60), 30_005);
        assert_eq!(wrapped(30_017, 1_000_000, 60), 30_000 + 1_000_000 % 60);
        // a wheel left near the edge is pulled back to the middle
        assert_eq!(wrapped(59_990, 7, 60), 30_007);
    }

    #[test]
    fn test_recenter_only_outside_safe_band() {
        assert_eq!(recenter(59, 60), Some(30_059));
        assert_eq!(recenter(60, 60), Some(30_000));
        assert_eq!(recenter(59_999, 60), Some(30_059));
        assert_eq!(recenter(30_060, 60), None);
        assert_eq!(recenter(15_000, 60), None);
        assert_eq!(recenter(45_000, 60), Some(30_000));
    }
}
