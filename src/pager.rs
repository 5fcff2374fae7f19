//! "Load more" windowing over filtered results.

/// Items revealed per page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Visible-prefix window over a result list.
///
/// Not part of filtering: callers [`reset`](Self::reset) it whenever the
/// query or selections change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    visible: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// One page visible. A zero page size is treated as 1.
    pub fn with_page_size(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            visible: page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current window length (may exceed the result count).
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Back to the first page.
    pub fn reset(&mut self) {
        self.visible = self.page_size;
    }

    /// Show `pages` pages at once (e.g. restored from a URL). Zero means one.
    pub fn set_pages(&mut self, pages: usize) {
        self.visible = self.page_size.saturating_mul(pages.max(1));
    }

    /// Reveal one more page, clamped to `total`.
    pub fn load_more(&mut self, total: usize) {
        self.visible = self
            .visible
            .saturating_add(self.page_size)
            .min(total.max(self.page_size));
    }

    /// Whether results remain hidden out of `total`.
    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    /// The visible prefix of `items`.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible.min(items.len())]
    }

    /// `(shown, total)` for the "Showing X of Y" line.
    pub fn showing(&self, total: usize) -> (usize, usize) {
        (self.visible.min(total), total)
    }
}
