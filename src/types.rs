//! Core types for the Grantboard listing system.
//!
//! This module defines the fundamental data structures used throughout the
//! application: grant records, the status enumeration, and the user-selected
//! filter criteria.

use chrono::NaiveDate;
use gpui::{Hsla, hsla};
use serde::{Deserialize, Serialize};

// ============================================================================
// Grant Records
// ============================================================================

/// A single funding offer. Read-only after seeding; the store never exposes
/// create/update/delete operations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grant {
    /// Unique identifier across the store
    pub id: u64,
    /// Human-readable grant number (e.g. "GR-2024-001")
    pub number: String,
    /// Grant title
    pub name: String,
    /// Issuing organization
    pub organization: String,
    /// Free-text description
    pub description: String,
    /// Funding amount in whole currency units
    pub amount: u64,
    /// Application deadline
    pub deadline: NaiveDate,
    /// Current status, drives display color and filter matching
    pub status: GrantStatus,
    /// Thematic funding areas; always non-empty in the seed data
    pub sectors: Vec<String>,
    /// Who may apply
    pub eligibility: String,
    /// Project duration description
    pub duration: String,
    /// Matching-funds requirement description
    pub matching_funds: String,
    /// Names of documents an application must include
    pub required_documents: Vec<String>,
    /// How many applications have been received so far
    pub applications_received: u32,
    /// Historical success rate, kept as a display string (e.g. "18%")
    pub success_rate: String,
}

impl Grant {
    /// Check whether any sector tag equals `sector` exactly.
    pub fn has_sector(&self, sector: &str) -> bool {
        self.sectors.iter().any(|s| s == sector)
    }
}

/// Grant lifecycle status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrantStatus {
    Open,
    ClosingSoon,
    Closed,
    Archived,
}

impl GrantStatus {
    /// All statuses, in display order (used by the status dropdown).
    pub const ALL: &[GrantStatus] = &[
        GrantStatus::Open,
        GrantStatus::ClosingSoon,
        GrantStatus::Closed,
        GrantStatus::Archived,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            GrantStatus::Open => "Open",
            GrantStatus::ClosingSoon => "Closing Soon",
            GrantStatus::Closed => "Closed",
            GrantStatus::Archived => "Archived",
        }
    }

    /// Fixed display color for status badges.
    pub fn color(&self) -> Hsla {
        match self {
            GrantStatus::Open => hsla(145.0 / 360.0, 0.65, 0.42, 1.0),
            GrantStatus::ClosingSoon => hsla(38.0 / 360.0, 0.90, 0.50, 1.0),
            GrantStatus::Closed => hsla(0.0, 0.70, 0.50, 1.0),
            GrantStatus::Archived => hsla(0.0, 0.0, 0.55, 1.0),
        }
    }
}

impl std::fmt::Display for GrantStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Filter Criteria
// ============================================================================

/// Status constraint selected in the filter bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    /// Pass every grant
    #[default]
    All,
    /// Require an exact status match
    Only(GrantStatus),
}

impl StatusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn matches(&self, status: GrantStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Sector sentinel restored by "Clear filters".
pub const SECTOR_ALL: &str = "All";

/// Distinct pass-everything sentinel shown as the dropdown's first entry.
pub const SECTOR_ALL_SECTORS: &str = "All Sectors";

/// The user-selected constraint set applied to narrow the grant list.
///
/// Amount bounds and the deadline floor are kept as the raw input text;
/// values that fail to parse impose no constraint rather than erroring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Sector tag, or one of the pass-everything sentinels
    pub sector: String,
    /// Status constraint
    pub status: StatusFilter,
    /// Minimum amount, raw input text
    pub min_amount: String,
    /// Maximum amount, raw input text
    pub max_amount: String,
    /// Earliest acceptable deadline, raw input text (YYYY-MM-DD)
    pub min_deadline: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            sector: SECTOR_ALL.to_string(),
            status: StatusFilter::default(),
            min_amount: String::new(),
            max_amount: String::new(),
            min_deadline: String::new(),
        }
    }
}

impl FilterCriteria {
    /// True when the sector clause passes every grant.
    pub fn sector_passes_all(&self) -> bool {
        self.sector == SECTOR_ALL || self.sector == SECTOR_ALL_SECTORS
    }
}
