//! Filter-related methods - search, criteria changes, clearing, pagination.

use gpui::{Context, Window};

use super::Grantboard;
use crate::filter::filter_grants;
use crate::types::{FilterCriteria, StatusFilter};

impl Grantboard {
    /// Mirror the input entities into the criteria and recompute the filtered
    /// list. Resets the current page so narrowing can never leave the page
    /// out of range.
    pub fn apply_filters(&mut self, cx: &mut Context<Self>) {
        if let Some(input) = &self.filters.search_input {
            self.filters.search = input.read(cx).value().to_string();
        }
        if let Some(input) = &self.filters.min_amount_input {
            self.filters.criteria.min_amount = input.read(cx).value().to_string();
        }
        if let Some(input) = &self.filters.max_amount_input {
            self.filters.criteria.max_amount = input.read(cx).value().to_string();
        }
        if let Some(input) = &self.filters.min_deadline_input {
            self.filters.criteria.min_deadline = input.read(cx).value().to_string();
        }

        self.recompute_listing(cx);
    }

    fn recompute_listing(&mut self, cx: &mut Context<Self>) {
        self.listing.filtered =
            filter_grants(&self.store, &self.filters.search, &self.filters.criteria);
        self.listing.table.refresh(self.listing.filtered.len());
        tracing::debug!(
            matches = self.listing.filtered.len(),
            search = %self.filters.search,
            "recomputed grant listing"
        );
        cx.notify();
    }

    pub fn set_sector(&mut self, sector: String, cx: &mut Context<Self>) {
        self.filters.criteria.sector = sector;
        self.filters.sector_dropdown_open = false;
        self.recompute_listing(cx);
    }

    pub fn set_status(&mut self, status: StatusFilter, cx: &mut Context<Self>) {
        self.filters.criteria.status = status;
        self.filters.status_dropdown_open = false;
        self.recompute_listing(cx);
    }

    pub fn toggle_sector_dropdown(&mut self, cx: &mut Context<Self>) {
        self.filters.sector_dropdown_open = !self.filters.sector_dropdown_open;
        self.filters.status_dropdown_open = false;
        cx.notify();
    }

    pub fn toggle_status_dropdown(&mut self, cx: &mut Context<Self>) {
        self.filters.status_dropdown_open = !self.filters.status_dropdown_open;
        self.filters.sector_dropdown_open = false;
        cx.notify();
    }

    /// Restore every criterion to its default and empty the inputs.
    pub fn clear_filters(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.filters.criteria = FilterCriteria::default();
        self.filters.search = String::new();
        self.filters.sector_dropdown_open = false;
        self.filters.status_dropdown_open = false;

        for input in [
            self.filters.search_input.clone(),
            self.filters.min_amount_input.clone(),
            self.filters.max_amount_input.clone(),
            self.filters.min_deadline_input.clone(),
        ]
        .into_iter()
        .flatten()
        {
            input.update(cx, |state, cx| state.set_value("", window, cx));
        }

        tracing::debug!("cleared filters");
        self.recompute_listing(cx);
    }

    pub fn go_prev_page(&mut self, cx: &mut Context<Self>) {
        self.listing.table.go_prev();
        cx.notify();
    }

    pub fn go_next_page(&mut self, cx: &mut Context<Self>) {
        self.listing.table.go_next();
        cx.notify();
    }

    pub fn go_first_page(&mut self, cx: &mut Context<Self>) {
        self.listing.table.go_first();
        cx.notify();
    }

    pub fn go_last_page(&mut self, cx: &mut Context<Self>) {
        self.listing.table.go_last();
        cx.notify();
    }
}
