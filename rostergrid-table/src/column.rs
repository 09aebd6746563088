//! Column descriptors

use rostergrid_model::Value;

use crate::row::TableRow;

/// Cell renderer: receives the looked-up value and the full row, returns the
/// display text. Absent, cells fall back to the value's `Display` coercion.
pub type RenderFn<R> = Box<dyn Fn(&Value, &R) -> String>;

/// Sort accessor: derives the sort key from the full row, overriding the
/// keyed field lookup.
pub type SortAccessor<R> = Box<dyn Fn(&R) -> Value>;

/// Comparison semantics for a sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKind {
    /// Case-insensitive lexicographic comparison of the stringified value.
    /// Missing values compare as the empty string. This is the fallback for
    /// any column that doesn't declare otherwise.
    #[default]
    Text,
    /// Numeric comparison; missing or unparseable values compare as 0.
    Number,
    /// Comparison by parsed timestamp; missing or unparseable values compare
    /// as the Unix epoch, so they sort before all valid dates.
    Date,
}

/// Static configuration for one column of a table.
///
/// Columns are supplied once per screen and never mutated by the table.
/// `key` addresses a field on the row type; duplicate keys across columns are
/// a caller error and are not guarded against.
///
/// # Example
///
/// ```
/// use rostergrid_model::Record;
/// use rostergrid_table::{Column, SortKind};
///
/// let columns: Vec<Column<Record>> = vec![
///     Column::new("name", "Name").sortable(true),
///     Column::new("age", "Age").sortable(true).sort_kind(SortKind::Number),
///     Column::new("hire_date", "Hired").sortable(true).sort_kind(SortKind::Date),
/// ];
/// ```
pub struct Column<R> {
    key: String,
    label: String,
    sortable: bool,
    sort_kind: SortKind,
    sort_accessor: Option<SortAccessor<R>>,
    render: Option<RenderFn<R>>,
}

impl<R: TableRow> Column<R> {
    /// Creates a column over the given row field with a display label.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            sort_kind: SortKind::default(),
            sort_accessor: None,
            render: None,
        }
    }

    /// Marks the column sortable. Non-sortable columns ignore sort clicks.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets the comparison semantics used when sorting by this column.
    pub fn sort_kind(mut self, kind: SortKind) -> Self {
        self.sort_kind = kind;
        self
    }

    /// Derives the sort key from the full row instead of the keyed field.
    ///
    /// Useful when the displayed field isn't the natural sort key, e.g. a
    /// column showing "3 days" that should sort by the underlying count.
    pub fn sort_with(mut self, accessor: impl Fn(&R) -> Value + 'static) -> Self {
        self.sort_accessor = Some(Box::new(accessor));
        self
    }

    /// Renders the cell with a custom function instead of the raw value.
    ///
    /// Panics inside the closure are not caught; callers own their renderers.
    pub fn render_with(mut self, render: impl Fn(&Value, &R) -> String + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// Returns the row field this column addresses.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` if the column responds to sort clicks.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Returns the comparison semantics for this column.
    pub fn kind(&self) -> SortKind {
        self.sort_kind
    }

    /// The value this column sorts the given row by.
    pub fn sort_value(&self, row: &R) -> Value {
        match &self.sort_accessor {
            Some(accessor) => accessor(row),
            None => row.value(&self.key).unwrap_or(Value::Null),
        }
    }

    /// The display text for this column's cell of the given row.
    pub fn cell_text(&self, row: &R) -> String {
        let value = row.value(&self.key).unwrap_or(Value::Null);
        match &self.render {
            Some(render) => render(&value, row),
            None => value.to_string(),
        }
    }
}
