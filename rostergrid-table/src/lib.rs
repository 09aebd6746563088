//! Generic tabular presenter for HRMS list screens
//!
//! Every list screen (employees, attendance, leave requests, password-reset
//! requests) renders the same way: a searchable, sortable, paginated table
//! over caller-owned rows, with optional per-page selection and row actions.
//! This crate owns that pipeline and nothing else: no fetching, no caching,
//! no async work. Rows are borrowed on every call and flow strictly one way,
//! raw rows → filter → sort → paginate → render.

pub mod column;
pub mod event;
pub mod filter;
pub mod page;
pub mod render;
pub mod row;
pub mod selection;
pub mod sort;

mod table;

pub use column::{Column, SortKind};
pub use event::TableEvent;
pub use page::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, Pager};
pub use render::{HeaderCell, PagerView, Placeholder, RowView, TableView, Toolbar};
pub use row::TableRow;
pub use selection::Selection;
pub use sort::{Direction, SortState};
pub use table::{Action, Table};
