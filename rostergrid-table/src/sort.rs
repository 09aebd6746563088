//! Sort stage
//!
//! Column-driven comparison with an ascending/descending toggle. The sort is
//! stable: rows with equal keys keep their relative input order in both
//! directions, because descending reverses the comparator rather than the
//! result and `Ordering::Equal` is unaffected by `reverse()`.

use std::cmp::Ordering;

use crate::column::{Column, SortKind};
use crate::row::TableRow;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9, oldest first).
    Asc,
    /// Descending order (Z-A, 9-0, newest first).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// The current sort column and direction of a table.
///
/// Lifecycle: starts unsorted and resets only on explicit user action.
/// Clicking the active column flips its direction; clicking a new column
/// selects it ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    column: Option<String>,
    direction: Direction,
}

impl SortState {
    /// Creates an unsorted state.
    pub fn new() -> Self {
        Self {
            column: None,
            direction: Direction::Asc,
        }
    }

    /// Applies a sort click on the given column key.
    pub fn toggle(&mut self, key: &str) {
        match &self.column {
            Some(current) if current == key => {
                self.direction = self.direction.flipped();
            }
            _ => {
                self.column = Some(key.to_string());
                self.direction = Direction::Asc;
            }
        }
    }

    /// Clears the sort back to input order.
    pub fn clear(&mut self) {
        self.column = None;
        self.direction = Direction::Asc;
    }

    /// Returns the active `(column, direction)`, if any.
    pub fn active(&self) -> Option<(&str, Direction)> {
        self.column.as_deref().map(|key| (key, self.direction))
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new()
    }
}

/// Compares two rows by a column, ascending.
pub fn compare<R: TableRow>(column: &Column<R>, a: &R, b: &R) -> Ordering {
    let va = column.sort_value(a);
    let vb = column.sort_value(b);
    match column.kind() {
        SortKind::Number => {
            let ka = va.as_f64().unwrap_or(0.0);
            let kb = vb.as_f64().unwrap_or(0.0);
            ka.total_cmp(&kb)
        }
        SortKind::Date => {
            let ka = va.as_datetime().map(|dt| dt.timestamp_millis()).unwrap_or(0);
            let kb = vb.as_datetime().map(|dt| dt.timestamp_millis()).unwrap_or(0);
            ka.cmp(&kb)
        }
        SortKind::Text => {
            let ka = va.to_string().to_lowercase();
            let kb = vb.to_string().to_lowercase();
            ka.cmp(&kb)
        }
    }
}

/// Stable-sorts row indices by the given column and direction.
pub fn sort_indices<R: TableRow>(
    indices: &mut [usize],
    rows: &[R],
    column: &Column<R>,
    direction: Direction,
) {
    indices.sort_by(|&a, &b| {
        let ordering = compare(column, &rows[a], &rows[b]);
        match direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });
}
