//! The column backend: whatever actually draws and spins the wheels.
//!
//! A host wires its native picker widget in by implementing [`Wheels`].
//! [`MemoryWheels`] is a headless backend with bounded columns, used by
//! the `dpick` binary and by tests.

/// Index-per-column selector, as exposed by a native picker widget.
pub trait Wheels {
    /// Rebuild the columns with the given raw row counts, one per column.
    fn reload(&mut self, row_counts: &[usize]);

    fn column_count(&self) -> usize;

    fn row_count(&self, column: usize) -> usize;

    fn selected_row(&self, column: usize) -> usize;

    /// Select a row. Rows past the end are clamped by the column itself.
    fn select_row(&mut self, column: usize, row: usize, animated: bool);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Column {
    rows: usize,
    selected: usize,
    animated: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryWheels {
    columns: Vec<Column>,
}

impl MemoryWheels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the last selection on `column` asked for an animation.
    pub fn last_animated(&self, column: usize) -> bool {
        self.columns.get(column).is_some_and(|c| c.animated)
    }
}

impl Wheels for MemoryWheels {
    fn reload(&mut self, row_counts: &[usize]) {
        self.columns.resize(row_counts.len(), Column::default());
        for (column, rows) in self.columns.iter_mut().zip(row_counts) {
            column.rows = *rows;
            column.selected = column.selected.min(rows.saturating_sub(1));
        }
    }

    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn row_count(&self, column: usize) -> usize {
        self.columns.get(column).map_or(0, |c| c.rows)
    }

    fn selected_row(&self, column: usize) -> usize {
        self.columns.get(column).map_or(0, |c| c.selected)
    }

    fn select_row(&mut self, column: usize, row: usize, animated: bool) {
        if let Some(c) = self.columns.get_mut(column) {
            c.selected = row.min(c.rows.saturating_sub(1));
            c.animated = animated;
        }
    }
}
