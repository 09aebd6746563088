//! Table input events

/// Discrete user inputs a host feeds into [`Table::handle`](crate::Table::handle).
///
/// Events are processed one at a time by the host's synchronous dispatch;
/// each is applied atomically before the next render. Row-addressed events
/// (`RowToggled`, `RowClicked`, `ActionClicked`) carry *page-relative*
/// indices into the currently visible slice.
///
/// Event targeting is also how click propagation is halted: a click the host
/// maps to the checkbox region arrives as `RowToggled`, a click in the action
/// cluster arrives as `ActionClicked`, and neither ever produces a row click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// The search box content changed (fires per keystroke, no debounce).
    SearchChanged(String),
    /// A column header was clicked, identified by column key.
    SortClicked(String),
    /// Jump to a 1-based page; out-of-range values clamp.
    PageSet(usize),
    /// Advance one page.
    NextPage,
    /// Go back one page.
    PrevPage,
    /// Select a new page size; resets to page 1.
    PageSizeSet(usize),
    /// Toggle the selection checkbox of one visible row.
    RowToggled(usize),
    /// Toggle the header "select all on this page" checkbox.
    SelectAllToggled,
    /// A visible row was clicked outside its checkbox/action regions.
    RowClicked(usize),
    /// An action button inside a visible row's action cluster was clicked.
    ActionClicked {
        /// Page-relative row index.
        row: usize,
        /// Action id as configured by the caller.
        action: String,
    },
}
