//! The table widget: state, event processing, and view computation

use log::debug;

use crate::column::Column;
use crate::event::TableEvent;
use crate::filter;
use crate::page::{DEFAULT_PAGE_SIZE, Pager};
use crate::render::{EMPTY_MESSAGE, HeaderCell, PagerView, Placeholder, RowView, TableView, Toolbar};
use crate::row::TableRow;
use crate::selection::Selection;
use crate::sort::{self, SortState};

/// One entry of a row's action cluster (e.g. edit/delete buttons).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Stable id reported back through `on_action`.
    pub id: String,
    /// Display label.
    pub label: String,
}

impl Action {
    /// Creates an action with an id and a display label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A searchable, sortable, paginated, optionally selectable table over
/// caller-owned rows.
///
/// The table owns its column configuration, callbacks, and view state
/// (query, sort, page, selection); it never owns rows. Hosts pass the row
/// collection into [`handle`](Table::handle) and [`view`](Table::view) on
/// every call, so the caller is free to refetch or re-filter its data between
/// renders.
///
/// On every render the pipeline runs in a fixed order: filter → sort →
/// paginate → render. Selection is orthogonal, keyed to positions within the
/// current page slice.
///
/// # Example
///
/// ```
/// use rostergrid_model::Record;
/// use rostergrid_table::{Column, SortKind, Table, TableEvent};
///
/// let rows = vec![
///     Record::new("employee").set("name", "Ann").set("age", 25i64),
///     Record::new("employee").set("name", "Bob").set("age", 30i64),
/// ];
///
/// let mut table = Table::new(vec![
///     Column::new("name", "Name").sortable(true),
///     Column::new("age", "Age").sortable(true).sort_kind(SortKind::Number),
/// ]);
///
/// table.handle(&rows, TableEvent::SortClicked("age".into()));
/// let view = table.view(&rows);
/// assert_eq!(view.rows[0].cells[0], "Ann");
/// ```
pub struct Table<R> {
    columns: Vec<Column<R>>,
    search_placeholder: String,
    filters: Vec<String>,
    selectable: bool,
    actions: Option<Box<dyn Fn(&R) -> Vec<Action>>>,

    on_search: Option<Box<dyn FnMut(&str)>>,
    on_row_click: Option<Box<dyn FnMut(&R)>>,
    on_selection_change: Option<Box<dyn FnMut(&[&R])>>,
    on_action: Option<Box<dyn FnMut(&str, &R)>>,

    query: String,
    sort: SortState,
    pager: Pager,
    selection: Selection,
}

impl<R: TableRow> Table<R> {
    /// Creates a table over the given columns with default configuration.
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self {
            columns,
            search_placeholder: String::from("Search"),
            filters: Vec::new(),
            selectable: false,
            actions: None,
            on_search: None,
            on_row_click: None,
            on_selection_change: None,
            on_action: None,
            query: String::new(),
            sort: SortState::new(),
            pager: Pager::new(DEFAULT_PAGE_SIZE),
            selection: Selection::new(),
        }
    }

    // =========================================================================
    // Configuration (builder)
    // =========================================================================

    /// Sets the display-only search box placeholder.
    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    /// Supplies caller-owned toolbar filter controls, opaque to the table.
    pub fn filters(mut self, filters: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.filters = filters.into_iter().map(Into::into).collect();
        self
    }

    /// Enables the leading checkbox column with select-all-on-page semantics.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Sets the starting page size (default 10).
    pub fn initial_page_size(mut self, page_size: usize) -> Self {
        self.pager = Pager::new(page_size);
        self
    }

    /// Supplies the per-row action cluster, rendered in a trailing column.
    /// Clicks inside it arrive as [`TableEvent::ActionClicked`] and never
    /// bubble to row clicks.
    pub fn actions(mut self, actions: impl Fn(&R) -> Vec<Action> + 'static) -> Self {
        self.actions = Some(Box::new(actions));
        self
    }

    /// Called with the query on every search change, in addition to the
    /// table's own client-side filter. Callers may use it to also restrict
    /// the row collection server-side; both layers run.
    pub fn on_search(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_search = Some(Box::new(callback));
        self
    }

    /// Called with the full row on a row click. Rows render as clickable
    /// only when this is set.
    pub fn on_row_click(mut self, callback: impl FnMut(&R) + 'static) -> Self {
        self.on_row_click = Some(Box::new(callback));
        self
    }

    /// Called with the materialized selected rows on every explicit
    /// selection change. Silent invalidation (page/sort/query changes) does
    /// not fire this.
    pub fn on_selection_change(mut self, callback: impl FnMut(&[&R]) + 'static) -> Self {
        self.on_selection_change = Some(Box::new(callback));
        self
    }

    /// Called with the action id and the full row when an action is clicked.
    pub fn on_action(mut self, callback: impl FnMut(&str, &R) + 'static) -> Self {
        self.on_action = Some(Box::new(callback));
        self
    }

    // =========================================================================
    // State accessors
    // =========================================================================

    /// Returns the current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the current sort state.
    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Returns the current pager.
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Returns the current page-relative selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    // =========================================================================
    // Event processing
    // =========================================================================

    /// Applies one user input event against the current row collection.
    ///
    /// Events are applied atomically; callbacks fire before this returns.
    pub fn handle(&mut self, rows: &[R], event: TableEvent) {
        match event {
            TableEvent::SearchChanged(query) => {
                debug!("table search changed: {query:?}");
                self.query = query;
                self.pager.reset();
                self.selection.clear();
                if let Some(on_search) = self.on_search.as_mut() {
                    on_search(&self.query);
                }
            }
            TableEvent::SortClicked(key) => {
                let sortable = self
                    .columns
                    .iter()
                    .any(|column| column.key() == key && column.is_sortable());
                if sortable {
                    self.sort.toggle(&key);
                    debug!("table sort: {:?}", self.sort.active());
                    self.selection.clear();
                }
            }
            TableEvent::PageSet(page) => {
                let total = filter::apply(rows, &self.query).len();
                if self.pager.set_page(page, total) {
                    self.selection.clear();
                }
            }
            TableEvent::NextPage => {
                let total = filter::apply(rows, &self.query).len();
                if self.pager.next(total) {
                    self.selection.clear();
                }
            }
            TableEvent::PrevPage => {
                let total = filter::apply(rows, &self.query).len();
                if self.pager.prev(total) {
                    self.selection.clear();
                }
            }
            TableEvent::PageSizeSet(page_size) => {
                if page_size != self.pager.page_size() {
                    self.pager.set_page_size(page_size);
                    self.selection.clear();
                }
            }
            TableEvent::RowToggled(index) => {
                let slice = self.visible(rows).slice;
                if index < slice.len() {
                    self.selection.toggle(index);
                    self.emit_selection(rows, &slice);
                }
            }
            TableEvent::SelectAllToggled => {
                let slice = self.visible(rows).slice;
                if !slice.is_empty() {
                    self.selection.toggle_all(slice.len());
                    self.emit_selection(rows, &slice);
                }
            }
            TableEvent::RowClicked(index) => {
                let slice = self.visible(rows).slice;
                if let Some(&global) = slice.get(index) {
                    if let Some(on_row_click) = self.on_row_click.as_mut() {
                        on_row_click(&rows[global]);
                    }
                }
            }
            TableEvent::ActionClicked { row, action } => {
                let slice = self.visible(rows).slice;
                if let Some(&global) = slice.get(row) {
                    if let Some(on_action) = self.on_action.as_mut() {
                        on_action(&action, &rows[global]);
                    }
                }
            }
        }
    }

    /// Computes the render snapshot for the current state.
    pub fn view(&self, rows: &[R]) -> TableView {
        let visible = self.visible(rows);

        let header = self
            .columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key().to_string(),
                label: column.label().to_string(),
                sortable: column.is_sortable(),
                sort: self
                    .sort
                    .active()
                    .filter(|(key, _)| *key == column.key())
                    .map(|(_, direction)| direction),
            })
            .collect();

        let clickable = self.on_row_click.is_some();
        let body: Vec<RowView> = visible
            .slice
            .iter()
            .enumerate()
            .map(|(index, &global)| {
                let row = &rows[global];
                RowView {
                    cells: self
                        .columns
                        .iter()
                        .map(|column| column.cell_text(row))
                        .collect(),
                    selected: if self.selectable {
                        Some(self.selection.is_selected(index))
                    } else {
                        None
                    },
                    clickable,
                    actions: self
                        .actions
                        .as_ref()
                        .map(|provider| provider(row))
                        .unwrap_or_default(),
                }
            })
            .collect();

        let placeholder = if visible.total == 0 {
            let span = self.columns.len()
                + usize::from(self.selectable)
                + usize::from(self.actions.is_some());
            Some(Placeholder {
                message: EMPTY_MESSAGE.to_string(),
                span,
            })
        } else {
            None
        };

        TableView {
            toolbar: Toolbar {
                search_placeholder: self.search_placeholder.clone(),
                query: self.query.clone(),
                filters: self.filters.clone(),
            },
            header,
            select_all: if self.selectable {
                Some(self.selection.all_selected(body.len()))
            } else {
                None
            },
            rows: body,
            placeholder,
            pager: PagerView::new(
                visible.page,
                visible.total_pages,
                self.pager.page_size(),
                visible.total,
            ),
        }
    }

    // =========================================================================
    // Pipeline
    // =========================================================================

    /// Runs filter → sort → paginate, returning the visible slice as global
    /// row indices plus the clamped pager figures.
    fn visible(&self, rows: &[R]) -> VisibleSlice {
        let mut indices = filter::apply(rows, &self.query);

        if let Some((key, direction)) = self.sort.active() {
            if let Some(column) = self.columns.iter().find(|column| column.key() == key) {
                sort::sort_indices(&mut indices, rows, column, direction);
            }
        }

        let total = indices.len();
        let total_pages = self.pager.total_pages(total);
        let page = self.pager.clamped(total);
        let (start, end) = self.pager.slice(total);

        VisibleSlice {
            slice: indices[start..end].to_vec(),
            total,
            page,
            total_pages,
        }
    }

    /// Re-resolves the selection against the current slice and reports the
    /// materialized rows.
    fn emit_selection(&mut self, rows: &[R], slice: &[usize]) {
        if let Some(on_selection_change) = self.on_selection_change.as_mut() {
            let selected: Vec<&R> = self
                .selection
                .indices()
                .filter_map(|index| slice.get(index))
                .map(|&global| &rows[global])
                .collect();
            on_selection_change(&selected);
        }
    }
}

/// Result of the filter/sort/paginate pipeline for one render.
struct VisibleSlice {
    /// Global row indices of the current page, in display order.
    slice: Vec<usize>,
    /// Rows that survived the filter.
    total: usize,
    /// Clamped 1-based page.
    page: usize,
    /// Page count, at least 1.
    total_pages: usize,
}
