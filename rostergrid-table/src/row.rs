//! Row seam between the presenter and caller-owned data

use rostergrid_model::{Record, Value};

/// The shape a row type must expose to the table.
///
/// The table never reflects over concrete types; it sees rows only through
/// this trait. [`fields`](TableRow::fields) drives the search filter (which
/// scans every field of the raw row, not the rendered cells) and
/// [`value`](TableRow::value) drives keyed lookups for sorting and cell
/// rendering.
///
/// A missing field is simply `None`; the pipeline degrades it to an empty
/// string, zero, or the epoch depending on the stage. Nothing panics.
pub trait TableRow {
    /// All fields of the row as `(name, value)` pairs.
    ///
    /// Order is not significant; the search filter matches against every
    /// entry regardless of which columns are configured.
    fn fields(&self) -> Vec<(String, Value)>;

    /// The value of a single field, if present.
    fn value(&self, field: &str) -> Option<Value> {
        self.fields()
            .into_iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }
}

impl TableRow for Record {
    fn fields(&self) -> Vec<(String, Value)> {
        self.fields()
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    fn value(&self, field: &str) -> Option<Value> {
        self.get(field).cloned()
    }
}
