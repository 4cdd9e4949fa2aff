//! The grant store: seed data and startup validation.
//!
//! The store is an immutable in-memory list seeded once at application start.
//! Nothing in this scope mutates it; the filter pipeline and the render layer
//! only ever borrow it.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::types::{Grant, GrantStatus, SECTOR_ALL_SECTORS};

/// Errors that can occur while validating the seeded store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Two grants share an id
    #[error("duplicate grant id {0}")]
    DuplicateId(u64),

    /// A grant carries no sector tags
    #[error("grant {0} has an empty sector list")]
    EmptySectors(u64),

    /// A grant's success-rate display string is malformed
    #[error("grant {id} has malformed success rate {rate:?}")]
    MalformedSuccessRate { id: u64, rate: String },
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Only called with literal dates from the seed table below.
    NaiveDate::from_ymd_opt(y, m, d).expect("seed deadline is a valid calendar date")
}

/// Build the seed grant list. Called once from application startup and from
/// tests; the returned data is identical on every call.
pub fn seed_grants() -> Vec<Grant> {
    vec![
        Grant {
            id: 1,
            number: "GR-2024-001".to_string(),
            name: "Rural Innovation Fund".to_string(),
            organization: "Ministry of Agriculture".to_string(),
            description: "Supports smallholder cooperatives adopting climate-resilient \
                          farming techniques and post-harvest storage."
                .to_string(),
            amount: 50_000,
            deadline: date(2024, 6, 30),
            status: GrantStatus::Open,
            sectors: vec!["Agriculture".to_string(), "Rural Development".to_string()],
            eligibility: "Registered cooperatives with at least 10 active members".to_string(),
            duration: "12 months".to_string(),
            matching_funds: "10% of requested amount".to_string(),
            required_documents: vec![
                "Registration certificate".to_string(),
                "Project proposal".to_string(),
                "Budget breakdown".to_string(),
                "Member roster".to_string(),
                "Bank statement".to_string(),
                "Tax clearance".to_string(),
            ],
            applications_received: 142,
            success_rate: "18%".to_string(),
        },
        Grant {
            id: 2,
            number: "GR-2024-002".to_string(),
            name: "Clean Water Access Initiative".to_string(),
            organization: "Global Health Partners".to_string(),
            description: "Funds community-led borehole drilling and water treatment \
                          installations in underserved districts."
                .to_string(),
            amount: 120_000,
            deadline: date(2024, 7, 15),
            status: GrantStatus::ClosingSoon,
            sectors: vec!["Health".to_string(), "Infrastructure".to_string()],
            eligibility: "Local NGOs operating for 3+ years".to_string(),
            duration: "18 months".to_string(),
            matching_funds: "None required".to_string(),
            required_documents: vec![
                "NGO registration".to_string(),
                "Technical proposal".to_string(),
                "Environmental assessment".to_string(),
                "Audited financials".to_string(),
            ],
            applications_received: 87,
            success_rate: "24%".to_string(),
        },
        Grant {
            id: 3,
            number: "GR-2024-003".to_string(),
            name: "Digital Skills for Youth".to_string(),
            organization: "TechForward Foundation".to_string(),
            description: "Trains out-of-school youth in software development, digital \
                          marketing, and IT support roles."
                .to_string(),
            amount: 75_000,
            deadline: date(2024, 8, 1),
            status: GrantStatus::Open,
            sectors: vec!["Education".to_string(), "Technology".to_string()],
            eligibility: "Training providers with accredited curricula".to_string(),
            duration: "24 months".to_string(),
            matching_funds: "15% in-kind contributions accepted".to_string(),
            required_documents: vec![
                "Accreditation certificate".to_string(),
                "Curriculum outline".to_string(),
                "Trainer CVs".to_string(),
                "Budget breakdown".to_string(),
                "Outcome tracking plan".to_string(),
            ],
            applications_received: 208,
            success_rate: "11%".to_string(),
        },
        Grant {
            id: 4,
            number: "GR-2023-017".to_string(),
            name: "Renewable Energy Microgrants".to_string(),
            organization: "Green Futures Trust".to_string(),
            description: "Small awards for household solar installations and community \
                          battery pilots."
                .to_string(),
            amount: 15_000,
            deadline: date(2024, 3, 31),
            status: GrantStatus::Closed,
            sectors: vec!["Energy".to_string(), "Environment".to_string()],
            eligibility: "Community associations and residential cooperatives".to_string(),
            duration: "6 months".to_string(),
            matching_funds: "None required".to_string(),
            required_documents: vec![
                "Association bylaws".to_string(),
                "Site survey".to_string(),
                "Vendor quotation".to_string(),
            ],
            applications_received: 315,
            success_rate: "32%".to_string(),
        },
        Grant {
            id: 5,
            number: "GR-2024-005".to_string(),
            name: "Women in Agribusiness Accelerator".to_string(),
            organization: "Ministry of Agriculture".to_string(),
            description: "Working capital and mentorship for women-led agribusinesses \
                          scaling beyond local markets."
                .to_string(),
            amount: 95_000,
            deadline: date(2024, 9, 15),
            status: GrantStatus::Open,
            sectors: vec!["Agriculture".to_string(), "Entrepreneurship".to_string()],
            eligibility: "Businesses with majority women ownership, 2+ years trading".to_string(),
            duration: "12 months".to_string(),
            matching_funds: "20% of requested amount".to_string(),
            required_documents: vec![
                "Business registration".to_string(),
                "Ownership declaration".to_string(),
                "Growth plan".to_string(),
                "Financial statements".to_string(),
                "Tax clearance".to_string(),
            ],
            applications_received: 64,
            success_rate: "29%".to_string(),
        },
        Grant {
            id: 6,
            number: "GR-2022-041".to_string(),
            name: "Heritage Preservation Fund".to_string(),
            organization: "National Arts Council".to_string(),
            description: "Restoration of historic buildings and digitization of cultural \
                          archives. Superseded by the 2025 program."
                .to_string(),
            amount: 40_000,
            deadline: date(2023, 11, 30),
            status: GrantStatus::Archived,
            sectors: vec!["Culture".to_string()],
            eligibility: "Museums, archives, and registered heritage bodies".to_string(),
            duration: "36 months".to_string(),
            matching_funds: "25% of requested amount".to_string(),
            required_documents: vec![
                "Institutional registration".to_string(),
                "Conservation plan".to_string(),
                "Heritage listing evidence".to_string(),
                "Budget breakdown".to_string(),
            ],
            applications_received: 53,
            success_rate: "21%".to_string(),
        },
    ]
}

/// Sector options for the filter dropdown: the pass-everything sentinel
/// followed by every distinct sector tag in the seed data, in first-seen order.
pub static SECTOR_OPTIONS: Lazy<Vec<String>> = Lazy::new(|| {
    let mut options = vec![SECTOR_ALL_SECTORS.to_string()];
    for grant in seed_grants() {
        for sector in grant.sectors {
            if !options.contains(&sector) {
                options.push(sector);
            }
        }
    }
    options
});

/// Validate store invariants: unique ids, non-empty sector lists, and
/// well-formed success-rate display strings. Runs once at startup.
pub fn validate(grants: &[Grant]) -> StoreResult<()> {
    let mut seen = std::collections::HashSet::new();
    for grant in grants {
        if !seen.insert(grant.id) {
            return Err(StoreError::DuplicateId(grant.id));
        }
        if grant.sectors.is_empty() {
            return Err(StoreError::EmptySectors(grant.id));
        }
        let rate = grant.success_rate.trim_end_matches('%');
        if rate.is_empty() || rate.parse::<u32>().ok().is_none_or(|r| r > 100) {
            return Err(StoreError::MalformedSuccessRate {
                id: grant.id,
                rate: grant.success_rate.clone(),
            });
        }
    }
    Ok(())
}
