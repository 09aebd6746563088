//! Render stage
//!
//! [`TableView`] is the per-render snapshot a host consumes: toolbar, header
//! cells, visible body rows (or the empty placeholder), and pager state. It
//! holds plain display strings so hosts can map it onto whatever widget tree
//! they own. [`TableView::to_lines`] additionally formats the snapshot as
//! fixed-width text lines for terminal hosts.

use unicode_width::UnicodeWidthStr;

use crate::page::PAGE_SIZE_OPTIONS;
use crate::sort::Direction;
use crate::table::Action;

/// Message shown when no rows survive the filter.
pub const EMPTY_MESSAGE: &str = "No results found";

/// Search box and caller-supplied filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbar {
    /// Display-only placeholder for the search box.
    pub search_placeholder: String,
    /// Current search query.
    pub query: String,
    /// Caller-owned filter controls, opaque to the table.
    pub filters: Vec<String>,
}

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column key.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Whether the column offers a sort affordance.
    pub sortable: bool,
    /// The active direction when this column drives the sort.
    pub sort: Option<Direction>,
}

/// One visible body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Rendered cell text, one entry per configured column.
    pub cells: Vec<String>,
    /// Checkbox state; `None` when the table isn't selectable.
    pub selected: Option<bool>,
    /// Whether the host should render the row as clickable.
    pub clickable: bool,
    /// Action cluster for the trailing column; empty when none configured.
    pub actions: Vec<Action>,
}

/// The single row rendered when the filtered collection is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Message text.
    pub message: String,
    /// Number of columns the row spans (checkbox + data + actions).
    pub span: usize,
}

/// Pager state after clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerView {
    /// Current 1-based page, clamped into `[1, total_pages]`.
    pub page: usize,
    /// Total pages, at least 1.
    pub total_pages: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Rows that survived the filter.
    pub total_rows: usize,
    /// Page sizes a host should offer.
    pub options: [usize; 4],
}

impl PagerView {
    /// Builds the pager view for a clamped page over `total_rows`.
    pub(crate) fn new(page: usize, total_pages: usize, page_size: usize, total_rows: usize) -> Self {
        Self {
            page,
            total_pages,
            page_size,
            total_rows,
            options: PAGE_SIZE_OPTIONS,
        }
    }
}

/// A fully computed render snapshot: filter → sort → paginate applied, cells
/// rendered, nothing left to decide but presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Search box and filter controls.
    pub toolbar: Toolbar,
    /// Header cells in column order.
    pub header: Vec<HeaderCell>,
    /// Header checkbox state; `None` when not selectable, otherwise whether
    /// every visible row is selected.
    pub select_all: Option<bool>,
    /// Visible rows for the current page. Empty when `placeholder` is set.
    pub rows: Vec<RowView>,
    /// Present exactly when no rows survived the filter.
    pub placeholder: Option<Placeholder>,
    /// Pager state.
    pub pager: PagerView,
}

impl TableView {
    /// Formats the view as fixed-width text lines.
    ///
    /// Widths are measured with `unicode-width`, so CJK names and other wide
    /// glyphs stay aligned.
    pub fn to_lines(&self) -> Vec<String> {
        let checkbox = self.select_all.is_some();
        let has_actions = self.rows.iter().any(|row| !row.actions.is_empty());

        let mut widths: Vec<usize> = self
            .header
            .iter()
            .map(|cell| header_text(cell).width())
            .collect();
        for row in &self.rows {
            for (index, cell) in row.cells.iter().enumerate() {
                if let Some(width) = widths.get_mut(index) {
                    *width = (*width).max(cell.width());
                }
            }
        }

        let mut lines = Vec::new();

        let search = if self.toolbar.query.is_empty() {
            format!("[ {} ]", self.toolbar.search_placeholder)
        } else {
            format!("[ {} ]", self.toolbar.query)
        };
        let mut toolbar = search;
        for filter in &self.toolbar.filters {
            toolbar.push_str("  ");
            toolbar.push_str(filter);
        }
        lines.push(toolbar);

        let mut header = String::new();
        if checkbox {
            header.push_str(if self.select_all == Some(true) {
                "[x] "
            } else {
                "[ ] "
            });
        }
        for (cell, width) in self.header.iter().zip(&widths) {
            header.push_str(&pad(&header_text(cell), *width));
            header.push_str("  ");
        }
        if has_actions {
            header.push_str("actions");
        }
        lines.push(header.trim_end().to_string());

        if let Some(placeholder) = &self.placeholder {
            lines.push(placeholder.message.clone());
        }

        for row in &self.rows {
            let mut line = String::new();
            if let Some(selected) = row.selected {
                line.push_str(if selected { "[x] " } else { "[ ] " });
            }
            for (cell, width) in row.cells.iter().zip(&widths) {
                line.push_str(&pad(cell, *width));
                line.push_str("  ");
            }
            let labels: Vec<&str> = row.actions.iter().map(|a| a.label.as_str()).collect();
            line.push_str(&labels.join(" "));
            lines.push(line.trim_end().to_string());
        }

        lines.push(format!(
            "page {}/{} ({} rows)",
            self.pager.page, self.pager.total_pages, self.pager.total_rows
        ));
        lines
    }
}

fn header_text(cell: &HeaderCell) -> String {
    match cell.sort {
        Some(Direction::Asc) => format!("{} ▲", cell.label),
        Some(Direction::Desc) => format!("{} ▼", cell.label),
        None => cell.label.clone(),
    }
}

fn pad(s: &str, width: usize) -> String {
    let mut out = s.to_string();
    for _ in s.width()..width {
        out.push(' ');
    }
    out
}
