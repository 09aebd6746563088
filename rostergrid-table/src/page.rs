//! Pagination stage

/// Page sizes offered by list-screen pagers.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Page size used when a screen doesn't specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 1-based page cursor over the filtered row count.
///
/// The stored page is kept clamped to `[1, total_pages]` against the total it
/// was last moved with; [`clamped`](Pager::clamped) re-clamps against the
/// current total so a shrinking row set can never leave the cursor past the
/// end. `total_pages` is never 0: an empty collection still has one (empty)
/// page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    /// Creates a pager on page 1. A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Returns the stored 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the page count for `total` rows, at least 1.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Returns the stored page clamped into `[1, total_pages]`.
    pub fn clamped(&self, total: usize) -> usize {
        self.page.clamp(1, self.total_pages(total))
    }

    /// Moves to `page`, clamped. Returns `true` if the effective page changed.
    pub fn set_page(&mut self, page: usize, total: usize) -> bool {
        let before = self.clamped(total);
        self.page = page.clamp(1, self.total_pages(total));
        self.page != before
    }

    /// Moves forward one page. Returns `true` if the effective page changed.
    pub fn next(&mut self, total: usize) -> bool {
        let current = self.clamped(total);
        self.set_page(current + 1, total)
    }

    /// Moves back one page. Returns `true` if the effective page changed.
    pub fn prev(&mut self, total: usize) -> bool {
        let current = self.clamped(total);
        self.set_page(current.saturating_sub(1), total)
    }

    /// Changes the page size and resets to page 1. A zero size is bumped to 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Resets to page 1.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Returns the `[start, end)` index range of the visible slice for
    /// `total` rows, using the clamped page.
    pub fn slice(&self, total: usize) -> (usize, usize) {
        let page = self.clamped(total);
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(total);
        (start.min(total), end)
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
