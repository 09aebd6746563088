//! Search filter stage
//!
//! Case-insensitive substring match across every field of the raw row.
//! Column configuration is irrelevant here: the filter scans row data, not
//! rendered cells. The stage operates on indices so the original row order
//! survives into the sort stage, and filtering is idempotent by construction.

use crate::row::TableRow;

/// Returns `true` if any field of the row contains the query as a
/// case-insensitive substring. An empty query matches everything.
pub fn matches<R: TableRow>(row: &R, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    row.fields()
        .iter()
        .any(|(_, value)| value.to_string().to_lowercase().contains(&needle))
}

/// Filters `rows` by `query`, returning the indices of matching rows in
/// their original order.
pub fn apply<R: TableRow>(rows: &[R], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..rows.len()).collect();
    }
    rows.iter()
        .enumerate()
        .filter(|(_, row)| matches(*row, query))
        .map(|(index, _)| index)
        .collect()
}
