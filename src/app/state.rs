//! Application state - the Grantboard struct definition and sub-structs.

use gpui::Entity;
use gpui_component::input::InputState;

use crate::table_state::GrantTableState;
use crate::types::{FilterCriteria, Grant};

/// Which top-level view is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    /// The "Available Grants" listing
    Grants,
    /// The apply flow placeholder, optionally carrying the grant the user
    /// arrived from
    Apply { grant_id: Option<u64> },
}

/// Navigation state - which view is active
pub struct NavigationState {
    /// Current view (Grants or Apply)
    pub view: AppView,
}

/// Filter bar state - search term, criteria, input entities, dropdowns
pub struct FilterState {
    /// Current search term, mirrored from the search input on every change
    pub search: String,
    /// Current filter criteria
    pub criteria: FilterCriteria,
    /// Search text input
    pub search_input: Option<Entity<InputState>>,
    /// Minimum amount input
    pub min_amount_input: Option<Entity<InputState>>,
    /// Maximum amount input
    pub max_amount_input: Option<Entity<InputState>>,
    /// Deadline floor input (YYYY-MM-DD)
    pub min_deadline_input: Option<Entity<InputState>>,
    /// Whether the sector dropdown is open
    pub sector_dropdown_open: bool,
    /// Whether the status dropdown is open
    pub status_dropdown_open: bool,
}

/// Listing state - the filtered view over the store and its pagination
pub struct ListingState {
    /// Indices into the store, in store order, after filtering
    pub filtered: Vec<usize>,
    /// Pagination state over `filtered`
    pub table: GrantTableState,
}

/// Detail modal state
pub struct DetailState {
    /// Id of the grant shown in the modal, if any
    pub selected: Option<u64>,
    /// Backdrop clicked flag for the click-to-close pattern
    pub backdrop_clicked: bool,
}

/// Main application state - composed of focused sub-structs
pub struct Grantboard {
    /// Immutable seeded grant list
    pub store: Vec<Grant>,
    /// Navigation state
    pub navigation: NavigationState,
    /// Filter bar state
    pub filters: FilterState,
    /// Filtered listing and pagination
    pub listing: ListingState,
    /// Detail modal state
    pub detail: DetailState,
}

impl Grantboard {
    /// The grant currently shown in the detail modal.
    pub fn selected_grant(&self) -> Option<&Grant> {
        let id = self.detail.selected?;
        self.store.iter().find(|g| g.id == id)
    }

    /// Grants on the current page, in store order.
    pub fn visible_grants(&self) -> Vec<&Grant> {
        self.listing.table.visible_range()
            .filter_map(|i| self.listing.filtered.get(i))
            .map(|&idx| &self.store[idx])
            .collect()
    }
}
