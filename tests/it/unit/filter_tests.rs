//! Unit tests for the filter pipeline.

use crate::helpers::{GrantBuilder, sector_criteria, seed_grant};
use grantboard::filter::{filter_grants, matches_criteria, matches_search};
use grantboard::store::seed_grants;
use grantboard::types::{FilterCriteria, GrantStatus, StatusFilter};

#[test]
fn test_search_hits_each_field() {
    let grant = GrantBuilder::new(1)
        .name("Coastal Resilience Fund")
        .organization("Ocean Trust")
        .build();

    assert!(matches_search(&grant, "coastal"));
    assert!(matches_search(&grant, "OCEAN"));
    assert!(matches_search(&grant, "used in tests"));
    assert!(matches_search(&grant, "gr-test-001"));
    assert!(!matches_search(&grant, "volcano"));
}

#[test]
fn test_seed_scenario_min_amount_excludes() {
    let grants = seed_grants();
    let criteria = FilterCriteria {
        min_amount: "60000".to_string(),
        ..Default::default()
    };
    // The seed grant with amount 50000 must be filtered out
    let filtered = filter_grants(&grants, "", &criteria);
    assert!(!filtered.iter().any(|&i| grants[i].id == 1));
}

#[test]
fn test_seed_scenario_unknown_sector_empty() {
    let grants = seed_grants();
    assert!(filter_grants(&grants, "", &sector_criteria("Fisheries")).is_empty());
}

#[test]
fn test_seed_scenario_defaults_full_list() {
    let grants = seed_grants();
    let filtered = filter_grants(&grants, "", &FilterCriteria::default());
    assert_eq!(filtered.len(), grants.len());
}

#[test]
fn test_both_sector_sentinels_pass() {
    let grant = seed_grant();
    assert!(matches_criteria(&grant, &sector_criteria("All")));
    assert!(matches_criteria(&grant, &sector_criteria("All Sectors")));
    assert!(matches_criteria(&grant, &sector_criteria("Agriculture")));
    assert!(!matches_criteria(&grant, &sector_criteria("Culture")));
}

#[test]
fn test_sector_match_is_exact() {
    let grant = GrantBuilder::new(2).sectors(&["Agriculture"]).build();
    // Substrings of a sector tag are not matches
    assert!(!matches_criteria(&grant, &sector_criteria("Agri")));
}

#[test]
fn test_amount_range_bounds_inclusive() {
    let grant = GrantBuilder::new(3).amount(50_000).build();

    let criteria = FilterCriteria {
        min_amount: "50000".to_string(),
        max_amount: "50000".to_string(),
        ..Default::default()
    };
    assert!(matches_criteria(&grant, &criteria));

    let criteria = FilterCriteria {
        max_amount: "49999".to_string(),
        ..Default::default()
    };
    assert!(!matches_criteria(&grant, &criteria));
}

#[test]
fn test_status_filter_exact() {
    let grants = seed_grants();
    let criteria = FilterCriteria {
        status: StatusFilter::Only(GrantStatus::Archived),
        ..Default::default()
    };
    let filtered = filter_grants(&grants, "", &criteria);
    assert!(!filtered.is_empty());
    for &i in &filtered {
        assert_eq!(grants[i].status, GrantStatus::Archived);
    }
}

#[test]
fn test_conjunction_equals_intersection_of_clauses() {
    let grants = seed_grants();
    let criteria = FilterCriteria {
        sector: "Agriculture".to_string(),
        status: StatusFilter::Only(GrantStatus::Open),
        ..Default::default()
    };

    let combined = filter_grants(&grants, "fund", &criteria);
    let by_search = filter_grants(&grants, "fund", &FilterCriteria::default());
    let by_sector = filter_grants(&grants, "", &sector_criteria("Agriculture"));
    let by_status = filter_grants(
        &grants,
        "",
        &FilterCriteria {
            status: StatusFilter::Only(GrantStatus::Open),
            ..Default::default()
        },
    );

    for &i in &combined {
        assert!(by_search.contains(&i));
        assert!(by_sector.contains(&i));
        assert!(by_status.contains(&i));
    }
    // And nothing in all three is missing from the combined result
    for i in 0..grants.len() {
        if by_search.contains(&i) && by_sector.contains(&i) && by_status.contains(&i) {
            assert!(combined.contains(&i));
        }
    }
}

#[test]
fn test_malformed_bounds_are_no_constraint() {
    let grants = seed_grants();
    let criteria = FilterCriteria {
        min_amount: "a lot".to_string(),
        max_amount: "12.5.7".to_string(),
        min_deadline: "soon".to_string(),
        ..Default::default()
    };
    assert_eq!(filter_grants(&grants, "", &criteria).len(), grants.len());
}

#[test]
fn test_misplaced_separators_are_no_constraint() {
    // "1,2" must not be read as 12 and "6 0" must not be read as 60;
    // both should leave the amount range unconstrained.
    let grants = seed_grants();
    for garbled in ["1,2", "6 0", "60,00", ",000"] {
        let criteria = FilterCriteria {
            min_amount: garbled.to_string(),
            ..Default::default()
        };
        assert_eq!(
            filter_grants(&grants, "", &criteria).len(),
            grants.len(),
            "{garbled:?} should impose no lower bound"
        );
    }
}
