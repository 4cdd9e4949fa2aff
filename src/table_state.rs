//! Pagination state for the grants table.
//!
//! Pages are 0-indexed internally and 1-indexed in display. Navigation is
//! always clamped: prev/next are no-ops at the boundaries, and a refresh
//! after refiltering snaps back to the first page so the current page can
//! never point past the narrowed result set.

use serde::{Deserialize, Serialize};

use crate::constants::PAGE_SIZE;

/// State for the paginated grants table
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GrantTableState {
    /// Current page (0-indexed)
    pub current_page: usize,
    /// Rows per page
    pub page_size: usize,
    /// Number of rows in the filtered list
    pub total_rows: usize,
}

impl GrantTableState {
    pub fn new(total_rows: usize) -> Self {
        Self {
            current_page: 0,
            page_size: PAGE_SIZE,
            total_rows,
        }
    }

    /// Conceptually at least one page exists even for an empty list; the UI
    /// shows an empty state instead of page controls in that case.
    pub fn total_pages(&self) -> usize {
        if self.total_rows == 0 {
            1
        } else {
            self.total_rows.div_ceil(self.page_size)
        }
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages().saturating_sub(1)
    }

    pub fn go_first(&mut self) {
        self.current_page = 0;
    }

    pub fn go_prev(&mut self) {
        if self.can_go_prev() {
            self.current_page -= 1;
        }
    }

    pub fn go_next(&mut self) {
        if self.can_go_next() {
            self.current_page += 1;
        }
    }

    pub fn go_last(&mut self) {
        self.current_page = self.total_pages().saturating_sub(1);
    }

    /// Adopt a new filtered row count and reset to the first page. Called on
    /// every search or criteria change.
    pub fn refresh(&mut self, total_rows: usize) {
        self.total_rows = total_rows;
        self.current_page = 0;
    }

    /// Get the range of rows to display for the current page
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = (self.current_page * self.page_size).min(self.total_rows);
        let end = (start + self.page_size).min(self.total_rows);
        start..end
    }
}
