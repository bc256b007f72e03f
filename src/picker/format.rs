use super::labels::{StringResolver, unit_label};
use super::unit::{Unit, UnitsStyle};

/// Human-readable rendering of per-unit counts, largest unit first.
///
/// Zero counts are skipped; an all-zero selection renders as zero of the
/// smallest unit, e.g. `0 seconds`.
pub fn format_duration(counts: &[(Unit, u64)], style: UnitsStyle, resolver: &dyn StringResolver) -> String {
    let mut sorted: Vec<(Unit, u64)> = counts.to_vec();
    sorted.sort_by(|a, b| b.0.as_seconds().cmp(&a.0.as_seconds()));

    let render = |unit: Unit, count: u64| {
        let label = unit_label(resolver, unit, style, usize::try_from(count).unwrap_or(usize::MAX));
        match style {
            UnitsStyle::Abbreviated => format!("{}{}", count, label),
            _ => format!("{} {}", count, label),
        }
    };

    let parts: Vec<String> = sorted
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(unit, count)| render(*unit, *count))
        .collect();

    if parts.is_empty() {
        return match sorted.last() {
            Some((unit, _)) => render(*unit, 0),
            None => String::new(),
        };
    }
    parts.join(" ")
}
