//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `GrantBuilder` - Builder pattern for creating test grants
//! - `ListingHarness` - The store/filter/paginate pipeline wired together the
//!   way the application's handlers drive it, without any UI in the loop
//! - Common fixtures over the seeded store

use chrono::NaiveDate;
use grantboard::filter::filter_grants;
use grantboard::store::seed_grants;
use grantboard::table_state::GrantTableState;
use grantboard::types::{FilterCriteria, Grant, GrantStatus};

// ============================================================================
// GrantBuilder - Builder pattern for creating test grants
// ============================================================================

/// Builder for creating test grants with sensible defaults.
///
/// # Example
/// ```ignore
/// let grant = GrantBuilder::new(7)
///     .name("Test Fund")
///     .amount(25_000)
///     .status(GrantStatus::Closed)
///     .build();
/// ```
pub struct GrantBuilder {
    grant: Grant,
}

impl GrantBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            grant: Grant {
                id,
                number: format!("GR-TEST-{:03}", id),
                name: format!("Test Grant {}", id),
                organization: "Test Organization".to_string(),
                description: "A grant used in tests.".to_string(),
                amount: 10_000,
                deadline: date(2024, 12, 31),
                status: GrantStatus::Open,
                sectors: vec!["Testing".to_string()],
                eligibility: "Anyone".to_string(),
                duration: "12 months".to_string(),
                matching_funds: "None required".to_string(),
                required_documents: vec!["Proposal".to_string()],
                applications_received: 0,
                success_rate: "50%".to_string(),
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.grant.name = name.into();
        self
    }

    pub fn organization(mut self, org: impl Into<String>) -> Self {
        self.grant.organization = org.into();
        self
    }

    pub fn amount(mut self, amount: u64) -> Self {
        self.grant.amount = amount;
        self
    }

    pub fn deadline(mut self, y: i32, m: u32, d: u32) -> Self {
        self.grant.deadline = date(y, m, d);
        self
    }

    pub fn status(mut self, status: GrantStatus) -> Self {
        self.grant.status = status;
        self
    }

    pub fn sectors(mut self, sectors: &[&str]) -> Self {
        self.grant.sectors = sectors.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> Grant {
        self.grant
    }
}

// ============================================================================
// ListingHarness - the pipeline as the handlers drive it
// ============================================================================

/// Store → filter → paginate, recomputed on every change exactly as the
/// application handlers do it (refiltering resets the page).
pub struct ListingHarness {
    pub store: Vec<Grant>,
    pub search: String,
    pub criteria: FilterCriteria,
    pub filtered: Vec<usize>,
    pub table: GrantTableState,
}

impl ListingHarness {
    /// Harness over the seeded store with default filters.
    pub fn seeded() -> Self {
        Self::with_store(seed_grants())
    }

    pub fn with_store(store: Vec<Grant>) -> Self {
        let filtered: Vec<usize> = (0..store.len()).collect();
        let table = GrantTableState::new(filtered.len());
        Self {
            store,
            search: String::new(),
            criteria: FilterCriteria::default(),
            filtered,
            table,
        }
    }

    fn recompute(&mut self) {
        self.filtered = filter_grants(&self.store, &self.search, &self.criteria);
        self.table.refresh(self.filtered.len());
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.recompute();
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.search = String::new();
        self.criteria = FilterCriteria::default();
        self.recompute();
    }

    /// Grants on the current page, in store order.
    pub fn visible(&self) -> Vec<&Grant> {
        self.table
            .visible_range()
            .filter_map(|i| self.filtered.get(i))
            .map(|&idx| &self.store[idx])
            .collect()
    }

    pub fn visible_ids(&self) -> Vec<u64> {
        self.visible().iter().map(|g| g.id).collect()
    }
}

// ============================================================================
// Standalone helpers
// ============================================================================

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The first seeded grant (amount 50000, deadline 2024-06-30, Open).
pub fn seed_grant() -> Grant {
    seed_grants().into_iter().next().unwrap()
}

/// Criteria with only the sector clause set.
pub fn sector_criteria(sector: &str) -> FilterCriteria {
    FilterCriteria {
        sector: sector.to_string(),
        ..Default::default()
    }
}
